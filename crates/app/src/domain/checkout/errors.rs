//! Checkout service errors.

use thiserror::Error;

use crate::domain::products::models::ProductId;

#[derive(Debug, Error)]
pub enum CheckoutServiceError {
    #[error("cart is empty")]
    EmptyCart,

    #[error("invalid quantity for product {0}")]
    InvalidQuantity(ProductId),

    #[error("product {0} is not available in the store, please refresh your cart")]
    ProductUnavailable(ProductId),

    #[error("product {name} is not available in the quantity requested")]
    InsufficientStock { product: ProductId, name: String },

    #[error("order total exceeds the representable amount")]
    TotalOverflow,

    #[error("storage error")]
    Sql(#[source] sqlx::Error),
}

impl From<sqlx::Error> for CheckoutServiceError {
    fn from(error: sqlx::Error) -> Self {
        Self::Sql(error)
    }
}
