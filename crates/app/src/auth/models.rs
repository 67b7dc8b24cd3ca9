//! Auth data models.

use jiff::Timestamp;

use crate::{domain::users::models::UserId, ids::TypedId};

/// API Token Id
pub type ApiTokenId = TypedId<ApiToken>;

/// API token metadata persisted in storage. The raw token itself is never
/// stored, only its digest.
#[derive(Debug, Clone)]
pub struct ApiToken {
    pub id: ApiTokenId,
    pub user_id: UserId,
    pub created_at: Timestamp,
}

/// API token issuance result with the one-time raw token.
#[derive(Debug, Clone)]
pub struct IssuedApiToken {
    pub token: String,
    pub metadata: ApiToken,
}
