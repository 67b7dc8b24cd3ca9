//! Depot helper extensions.

use std::any::Any;

use salvo::prelude::{Depot, StatusError};

use storefront_app::domain::users::models::UserId;

const USER_ID_KEY: &str = "storefront.user_id";

/// Helpers for mapping depot extraction failures to HTTP errors, and for
/// carrying the authenticated user through a request.
pub(crate) trait DepotExt {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError>;

    /// Record the authenticated user for downstream handlers.
    fn insert_user_id(&mut self, user: UserId);

    /// The authenticated user, or 401 when authentication never ran.
    fn user_id_or_401(&self) -> Result<UserId, StatusError>;
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError> {
        self.obtain::<T>()
            .map_err(|_ignored| StatusError::internal_server_error())
    }

    fn insert_user_id(&mut self, user: UserId) {
        self.insert(USER_ID_KEY, user);
    }

    fn user_id_or_401(&self) -> Result<UserId, StatusError> {
        self.get::<UserId>(USER_ID_KEY)
            .ok()
            .copied()
            .ok_or_else(|| StatusError::unauthorized().brief("Missing authenticated user"))
    }
}
