//! Product Models

use jiff::Timestamp;

use crate::ids::TypedId;

/// Product Id
pub type ProductId = TypedId<Product>;

/// Product Model
#[derive(Debug, Clone)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Unit price in minor units (pence/cents).
    pub price: u64,
    /// Units in stock.
    pub quantity: u64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
