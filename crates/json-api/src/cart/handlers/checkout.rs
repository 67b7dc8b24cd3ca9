//! Cart Checkout Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use storefront_app::domain::checkout::models::{Cart, CartItem};

use crate::{cart::errors::into_status_error, extensions::*, state::State};

/// Checkout Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CheckoutRequest {
    /// Cart lines to purchase
    pub items: Vec<CheckoutItemRequest>,

    /// Shipping address for the order
    pub address: String,
}

/// A single cart line of a checkout request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CheckoutItemRequest {
    pub product_id: i64,
    pub quantity: i64,
}

impl From<CheckoutRequest> for Cart {
    fn from(request: CheckoutRequest) -> Self {
        Cart {
            items: request
                .items
                .into_iter()
                .map(|item| CartItem {
                    product_id: item.product_id.into(),
                    quantity: item.quantity,
                })
                .collect(),
            address: request.address,
        }
    }
}

/// Checkout Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CheckoutResponse {
    /// Computed order total in minor units
    pub total_price: u64,

    /// Created order id
    #[serde(rename = "orderId")]
    pub order_id: i64,
}

/// Cart Checkout Handler
///
/// Validates the cart against current stock, decrements inventory, and
/// creates the order with one line item per cart line.
#[endpoint(
    tags("cart"),
    summary = "Checkout Cart",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Order created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid payload or cart rejected"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Missing or invalid token"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CheckoutRequest>,
    depot: &mut Depot,
) -> Result<Json<CheckoutResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_id_or_401()?;
    let request = json.into_inner();

    if request.address.trim().is_empty() {
        return Err(StatusError::bad_request().brief("Address must not be empty"));
    }

    let receipt = state
        .app
        .checkout
        .checkout(user, request.into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(CheckoutResponse {
        total_price: receipt.total,
        order_id: receipt.order_id.into_i64(),
    }))
}
