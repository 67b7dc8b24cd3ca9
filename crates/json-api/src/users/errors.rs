//! User Errors

use salvo::http::StatusError;
use storefront_app::domain::users::UsersServiceError;
use tracing::error;

pub(crate) fn into_status_error(error: UsersServiceError) -> StatusError {
    match error {
        UsersServiceError::AlreadyExists => {
            StatusError::conflict().brief("User with this email already exists")
        }
        UsersServiceError::MissingRequiredData => {
            StatusError::bad_request().brief("Invalid user payload")
        }
        UsersServiceError::InvalidCredentials => {
            StatusError::unauthorized().brief("Invalid email or password")
        }
        UsersServiceError::Sql(source) => {
            error!("users storage failure: {source}");

            StatusError::internal_server_error()
        }
        UsersServiceError::NotFound => StatusError::not_found().brief("User not found"),
    }
}
