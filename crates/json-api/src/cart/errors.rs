//! Cart Errors

use salvo::http::StatusError;
use storefront_app::domain::checkout::CheckoutServiceError;
use tracing::error;

/// Business-rule rejections surface as 400s with the service's message;
/// storage faults surface as logged 500s.
pub(crate) fn into_status_error(error: CheckoutServiceError) -> StatusError {
    match error {
        CheckoutServiceError::EmptyCart
        | CheckoutServiceError::InvalidQuantity(_)
        | CheckoutServiceError::ProductUnavailable(_)
        | CheckoutServiceError::InsufficientStock { .. }
        | CheckoutServiceError::TotalOverflow => {
            StatusError::bad_request().brief(error.to_string())
        }
        CheckoutServiceError::Sql(source) => {
            error!("checkout storage failure: {source}");

            StatusError::internal_server_error()
        }
    }
}
