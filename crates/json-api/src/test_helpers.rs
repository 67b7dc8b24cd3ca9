//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{affix_state::inject, prelude::*};

use storefront_app::{
    auth::MockAuthService,
    context::AppContext,
    domain::{
        checkout::MockCheckoutService,
        products::{MockProductsService, models::Product, models::ProductId},
        users::{MockUsersService, models::User, models::UserId},
    },
};

use crate::{extensions::*, state::State};

pub(crate) const TEST_USER_ID: UserId = UserId::from_i64(7);

/// Stands in for the auth middleware in handler tests.
#[salvo::handler]
pub(crate) async fn inject_user(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    depot.insert_user_id(TEST_USER_ID);
    ctrl.call_next(req, depot, res).await;
}

pub(crate) fn make_product(id: i64) -> Product {
    Product {
        id: ProductId::from_i64(id),
        name: format!("Product {id}"),
        price: 100,
        quantity: 5,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_user(id: i64) -> User {
    User {
        id: UserId::from_i64(id),
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        created_at: Timestamp::UNIX_EPOCH,
    }
}

fn strict_auth_mock() -> MockAuthService {
    let mut auth = MockAuthService::new();

    auth.expect_issue_api_token().never();
    auth.expect_authenticate_bearer().never();

    auth
}

fn strict_products_mock() -> MockProductsService {
    let mut products = MockProductsService::new();

    products.expect_list_products().never();
    products.expect_get_product().never();
    products.expect_create_product().never();

    products
}

fn strict_users_mock() -> MockUsersService {
    let mut users = MockUsersService::new();

    users.expect_register_user().never();
    users.expect_get_user().never();
    users.expect_verify_credentials().never();

    users
}

fn strict_checkout_mock() -> MockCheckoutService {
    let mut checkout = MockCheckoutService::new();

    checkout.expect_checkout().never();

    checkout
}

fn app_context(
    products: MockProductsService,
    checkout: MockCheckoutService,
    users: MockUsersService,
    auth: MockAuthService,
) -> AppContext {
    AppContext {
        products: Arc::new(products),
        checkout: Arc::new(checkout),
        users: Arc::new(users),
        auth: Arc::new(auth),
    }
}

pub(crate) fn state_with_products(products: MockProductsService) -> Arc<State> {
    Arc::new(State::new(app_context(
        products,
        strict_checkout_mock(),
        strict_users_mock(),
        strict_auth_mock(),
    )))
}

pub(crate) fn state_with_checkout(checkout: MockCheckoutService) -> Arc<State> {
    Arc::new(State::new(app_context(
        strict_products_mock(),
        checkout,
        strict_users_mock(),
        strict_auth_mock(),
    )))
}

pub(crate) fn state_with_users(users: MockUsersService) -> Arc<State> {
    Arc::new(State::new(app_context(
        strict_products_mock(),
        strict_checkout_mock(),
        users,
        strict_auth_mock(),
    )))
}

pub(crate) fn state_with_users_and_auth(
    users: MockUsersService,
    auth: MockAuthService,
) -> Arc<State> {
    Arc::new(State::new(app_context(
        strict_products_mock(),
        strict_checkout_mock(),
        users,
        auth,
    )))
}

pub(crate) fn state_with_auth(auth: MockAuthService) -> Arc<State> {
    Arc::new(State::new(app_context(
        strict_products_mock(),
        strict_checkout_mock(),
        strict_users_mock(),
        auth,
    )))
}

pub(crate) fn products_service(products: MockProductsService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_products(products)))
            .push(route),
    )
}

pub(crate) fn checkout_service(checkout: MockCheckoutService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_checkout(checkout)))
            .hoop(inject_user)
            .push(route),
    )
}

pub(crate) fn users_service(users: MockUsersService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_users(users)))
            .push(route),
    )
}

pub(crate) fn login_service(
    users: MockUsersService,
    auth: MockAuthService,
    route: Router,
) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_users_and_auth(users, auth)))
            .push(route),
    )
}
