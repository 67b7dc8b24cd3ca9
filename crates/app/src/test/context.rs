//! Test context for service-level integration tests.

use crate::{
    auth::service::PgAuthService,
    database::Db,
    domain::{
        checkout::PgCheckoutService,
        orders::{
            models::{Order, OrderId, OrderItem},
            repository::PgOrdersRepository,
        },
        products::PgProductsService,
        users::{PgUsersService, UsersService, data::NewUser, models::UserId},
    },
};

use super::db::TestDb;

pub(crate) struct TestContext {
    pub db: TestDb,
    /// A registered user available to every test.
    pub user_id: UserId,
    pub products: PgProductsService,
    pub checkout: PgCheckoutService,
    pub users: PgUsersService,
    pub auth: PgAuthService,
}

impl TestContext {
    pub(crate) async fn new() -> Self {
        let test_db = TestDb::new().await;
        let db = Db::new(test_db.pool().clone());

        let users = PgUsersService::new(db.clone());

        let user = users
            .register_user(NewUser {
                first_name: "Test".to_string(),
                last_name: "Shopper".to_string(),
                email: "shopper@example.com".to_string(),
                password: "hunter2hunter2".to_string(),
            })
            .await
            .expect("Failed to create default test user");

        Self {
            products: PgProductsService::new(db.clone()),
            checkout: PgCheckoutService::new(db.clone()),
            auth: PgAuthService::new(db),
            users,
            user_id: user.id,
            db: test_db,
        }
    }

    /// Read an order back for assertions.
    pub(crate) async fn get_order(&self, order: OrderId) -> Result<Order, sqlx::Error> {
        let db = Db::new(self.db.pool().clone());
        let mut tx = db.begin().await?;

        let order = PgOrdersRepository::new().get_order(&mut tx, order).await?;

        tx.commit().await?;

        Ok(order)
    }

    /// Read an order's line items back for assertions, ordered by id.
    pub(crate) async fn get_order_items(
        &self,
        order: OrderId,
    ) -> Result<Vec<OrderItem>, sqlx::Error> {
        let db = Db::new(self.db.pool().clone());
        let mut tx = db.begin().await?;

        let items = PgOrdersRepository::new()
            .get_order_items(&mut tx, order)
            .await?;

        tx.commit().await?;

        Ok(items)
    }
}
