//! Users service.

use async_trait::async_trait;
use mockall::automock;
use rand::{RngCore, rngs::OsRng};
use sha2::{Digest, Sha256};

use crate::{
    auth::token::hex_encode,
    database::Db,
    domain::users::{
        data::NewUser,
        errors::UsersServiceError,
        models::{User, UserId},
        repository::PgUsersRepository,
    },
};

const SALT_BYTES: usize = 16;

#[derive(Debug, Clone)]
pub struct PgUsersService {
    db: Db,
    repository: PgUsersRepository,
}

impl PgUsersService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgUsersRepository::new(),
        }
    }
}

#[async_trait]
impl UsersService for PgUsersService {
    async fn register_user(&self, user: NewUser) -> Result<User, UsersServiceError> {
        if user.password.is_empty() {
            return Err(UsersServiceError::MissingRequiredData);
        }

        let salt = generate_salt();
        let hash = digest_password(&salt, &user.password);

        let mut tx = self.db.begin().await?;

        let created = self
            .repository
            .create_user(
                &mut tx,
                &user.first_name,
                &user.last_name,
                &user.email,
                &hash,
                &salt,
            )
            .await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn get_user(&self, user: UserId) -> Result<User, UsersServiceError> {
        let mut tx = self.db.begin().await?;

        let user = self.repository.get_user(&mut tx, user).await?;

        tx.commit().await?;

        Ok(user)
    }

    async fn verify_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<User, UsersServiceError> {
        let mut tx = self.db.begin().await?;

        let credentials = self
            .repository
            .find_user_credentials_by_email(&mut tx, email)
            .await?
            .ok_or(UsersServiceError::InvalidCredentials)?;

        tx.commit().await?;

        if digest_password(&credentials.password_salt, password) != credentials.password_hash {
            return Err(UsersServiceError::InvalidCredentials);
        }

        Ok(credentials.user)
    }
}

#[automock]
#[async_trait]
pub trait UsersService: Send + Sync {
    /// Register a new user, hashing the supplied password with a fresh salt.
    async fn register_user(&self, user: NewUser) -> Result<User, UsersServiceError>;

    /// Retrieve a single user.
    async fn get_user(&self, user: UserId) -> Result<User, UsersServiceError>;

    /// Look up the user for the given email and check the password against
    /// the stored digest. Unknown email and wrong password are
    /// indistinguishable to the caller.
    async fn verify_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<User, UsersServiceError>;
}

fn generate_salt() -> String {
    let mut bytes = [0_u8; SALT_BYTES];

    OsRng.fill_bytes(&mut bytes);

    hex_encode(&bytes)
}

fn digest_password(salt: &str, password: &str) -> String {
    let mut hasher = Sha256::new();

    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());

    format!("{:x}", hasher.finalize())
}
