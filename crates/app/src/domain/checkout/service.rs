//! Checkout service.
//!
//! The whole checkout runs inside one transaction: the product rows are
//! fetched `FOR UPDATE`, validated, decremented, and the order and its
//! line items inserted before the commit. A failure at any point rolls
//! everything back, so a rejected cart never leaves partial decrements or
//! an orphaned order behind.

use async_trait::async_trait;
use mockall::automock;
use rustc_hash::FxHashMap;

use crate::{
    database::Db,
    domain::{
        checkout::{
            errors::CheckoutServiceError,
            models::{Cart, CartItem, CheckoutReceipt},
        },
        orders::{
            data::{NewOrder, NewOrderItem},
            models::{OrderId, OrderStatus},
            repository::PgOrdersRepository,
        },
        products::{
            models::{Product, ProductId},
            repository::PgProductsRepository,
        },
        users::models::UserId,
    },
};

#[derive(Debug, Clone)]
pub struct PgCheckoutService {
    db: Db,
    products_repository: PgProductsRepository,
    orders_repository: PgOrdersRepository,
}

impl PgCheckoutService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            products_repository: PgProductsRepository::new(),
            orders_repository: PgOrdersRepository::new(),
        }
    }
}

#[async_trait]
impl CheckoutService for PgCheckoutService {
    async fn checkout(
        &self,
        user: UserId,
        cart: Cart,
    ) -> Result<CheckoutReceipt, CheckoutServiceError> {
        // Both checks run before any store access.
        let requested = requested_quantities(&cart.items)?;

        if requested.is_empty() {
            return Err(CheckoutServiceError::EmptyCart);
        }

        let product_ids: Vec<ProductId> = requested.iter().map(|(id, _)| *id).collect();

        let mut tx = self.db.begin().await?;

        // Point-in-time snapshot, rows locked until commit.
        let products = self
            .products_repository
            .get_products_for_update(&mut tx, &product_ids)
            .await?;

        let products = index_products(products);

        check_stock(&requested, &products)?;

        let total = total_price(&cart.items, &products)?;

        for (product, quantity) in &requested {
            let rows_affected = self
                .products_repository
                .decrement_stock(&mut tx, *product, *quantity)
                .await?;

            // The rows are locked, so this only fires if the snapshot and
            // the decrement disagree — treat it as the stock check failing.
            if rows_affected == 0 {
                return Err(insufficient_stock(*product, &products));
            }
        }

        let order = self
            .orders_repository
            .create_order(
                &mut tx,
                &NewOrder {
                    user_id: user,
                    total,
                    status: OrderStatus::Pending,
                    address: cart.address,
                },
            )
            .await?;

        for item in &cart.items {
            self.orders_repository
                .create_order_item(&mut tx, &order_line(order.id, item, &products)?)
                .await?;
        }

        tx.commit().await?;

        tracing::info!(order = %order.id, user = %user, total, "checkout completed");

        Ok(CheckoutReceipt {
            order_id: order.id,
            total,
        })
    }
}

#[automock]
#[async_trait]
pub trait CheckoutService: Send + Sync {
    /// Check out a cart for the given user, returning the created order id
    /// and the computed total.
    async fn checkout(
        &self,
        user: UserId,
        cart: Cart,
    ) -> Result<CheckoutReceipt, CheckoutServiceError>;
}

/// Validate every line's quantity and aggregate the requested units per
/// product, preserving first-occurrence order. Duplicate lines for the
/// same product are summed so the stock check sees the cart's real demand.
fn requested_quantities(
    items: &[CartItem],
) -> Result<Vec<(ProductId, u64)>, CheckoutServiceError> {
    let mut positions: FxHashMap<ProductId, usize> = FxHashMap::default();
    let mut requested: Vec<(ProductId, u64)> = Vec::with_capacity(items.len());

    for item in items {
        let quantity = u64::try_from(item.quantity)
            .ok()
            .filter(|quantity| *quantity > 0)
            .ok_or(CheckoutServiceError::InvalidQuantity(item.product_id))?;

        match positions.get(&item.product_id) {
            Some(&position) => {
                let entry = &mut requested[position];

                entry.1 = entry
                    .1
                    .checked_add(quantity)
                    .ok_or(CheckoutServiceError::TotalOverflow)?;
            }
            None => {
                positions.insert(item.product_id, requested.len());
                requested.push((item.product_id, quantity));
            }
        }
    }

    Ok(requested)
}

fn index_products(products: Vec<Product>) -> FxHashMap<ProductId, Product> {
    products
        .into_iter()
        .map(|product| (product.id, product))
        .collect()
}

/// Full pre-check pass: every requested product must be present in the
/// snapshot with enough stock before anything is mutated.
fn check_stock(
    requested: &[(ProductId, u64)],
    products: &FxHashMap<ProductId, Product>,
) -> Result<(), CheckoutServiceError> {
    for (product_id, quantity) in requested {
        let product = products
            .get(product_id)
            .ok_or(CheckoutServiceError::ProductUnavailable(*product_id))?;

        if product.quantity < *quantity {
            return Err(CheckoutServiceError::InsufficientStock {
                product: *product_id,
                name: product.name.clone(),
            });
        }
    }

    Ok(())
}

/// Sum of snapshot unit price times requested quantity over the cart
/// lines. Prices come from the snapshot only; nothing client-supplied is
/// trusted.
fn total_price(
    items: &[CartItem],
    products: &FxHashMap<ProductId, Product>,
) -> Result<u64, CheckoutServiceError> {
    let mut total: u64 = 0;

    for item in items {
        let product = products
            .get(&item.product_id)
            .ok_or(CheckoutServiceError::ProductUnavailable(item.product_id))?;

        let quantity = u64::try_from(item.quantity)
            .map_err(|_| CheckoutServiceError::InvalidQuantity(item.product_id))?;

        let line = product
            .price
            .checked_mul(quantity)
            .ok_or(CheckoutServiceError::TotalOverflow)?;

        total = total
            .checked_add(line)
            .ok_or(CheckoutServiceError::TotalOverflow)?;
    }

    Ok(total)
}

fn order_line(
    order_id: OrderId,
    item: &CartItem,
    products: &FxHashMap<ProductId, Product>,
) -> Result<NewOrderItem, CheckoutServiceError> {
    let product = products
        .get(&item.product_id)
        .ok_or(CheckoutServiceError::ProductUnavailable(item.product_id))?;

    let quantity = u64::try_from(item.quantity)
        .map_err(|_| CheckoutServiceError::InvalidQuantity(item.product_id))?;

    Ok(NewOrderItem {
        order_id,
        product_id: item.product_id,
        quantity,
        price: product.price,
    })
}

fn insufficient_stock(
    product: ProductId,
    products: &FxHashMap<ProductId, Product>,
) -> CheckoutServiceError {
    CheckoutServiceError::InsufficientStock {
        product,
        name: products
            .get(&product)
            .map(|found| found.name.clone())
            .unwrap_or_default(),
    }
}
