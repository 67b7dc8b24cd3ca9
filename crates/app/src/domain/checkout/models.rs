//! Checkout Models

use crate::domain::{orders::models::OrderId, products::models::ProductId};

/// A single line of a client-submitted cart.
///
/// The quantity stays signed until [`checkout`] validates it, so a
/// non-positive value is reported as an invalid quantity for the named
/// product rather than rejected as an undecodable payload.
///
/// [`checkout`]: crate::domain::checkout::CheckoutService::checkout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartItem {
    pub product_id: ProductId,
    pub quantity: i64,
}

/// Checkout payload: the cart lines and the shipping address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cart {
    pub items: Vec<CartItem>,
    pub address: String,
}

/// Outcome of a successful checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckoutReceipt {
    pub order_id: OrderId,
    /// Order total in minor units.
    pub total: u64,
}
