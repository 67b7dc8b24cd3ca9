//! Order Data

use crate::domain::{
    orders::models::{OrderId, OrderStatus},
    products::models::ProductId,
    users::models::UserId,
};

/// New Order Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrder {
    pub user_id: UserId,
    pub total: u64,
    pub status: OrderStatus,
    pub address: String,
}

/// New Order Item Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrderItem {
    pub order_id: OrderId,
    pub product_id: ProductId,
    pub quantity: u64,
    pub price: u64,
}
