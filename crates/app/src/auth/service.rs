//! Auth service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    auth::{
        errors::AuthServiceError,
        models::IssuedApiToken,
        repository::PgAuthRepository,
        token::{ApiTokenSecret, format_api_token, hash_api_token, validate_api_token_shape},
    },
    database::Db,
    domain::users::models::UserId,
};

#[derive(Debug, Clone)]
pub struct PgAuthService {
    db: Db,
    repository: PgAuthRepository,
}

impl PgAuthService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgAuthRepository::new(),
        }
    }
}

#[async_trait]
impl AuthService for PgAuthService {
    async fn issue_api_token(&self, user: UserId) -> Result<IssuedApiToken, AuthServiceError> {
        let secret = ApiTokenSecret::generate();
        let token = format_api_token(&secret);
        let token_hash = hash_api_token(&token);

        let mut tx = self.db.begin().await?;

        let metadata = self
            .repository
            .create_api_token(&mut tx, user, &token_hash)
            .await?;

        tx.commit().await?;

        Ok(IssuedApiToken { token, metadata })
    }

    async fn authenticate_bearer(&self, bearer_token: &str) -> Result<UserId, AuthServiceError> {
        validate_api_token_shape(bearer_token).map_err(|_| AuthServiceError::NotFound)?;

        let mut tx = self.db.begin().await?;

        let user = self
            .repository
            .find_user_by_token_hash(&mut tx, &hash_api_token(bearer_token))
            .await?;

        tx.commit().await?;

        user.ok_or(AuthServiceError::NotFound)
    }
}

#[automock]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Issue a new API token for the given user. The raw token is returned
    /// exactly once; only its digest is stored.
    async fn issue_api_token(&self, user: UserId) -> Result<IssuedApiToken, AuthServiceError>;

    /// Resolve a presented bearer token to the user it was issued for.
    async fn authenticate_bearer(&self, bearer_token: &str) -> Result<UserId, AuthServiceError>;
}
