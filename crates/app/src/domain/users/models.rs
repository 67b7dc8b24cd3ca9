//! User Models

use jiff::Timestamp;

use crate::ids::TypedId;

/// User Id
pub type UserId = TypedId<User>;

/// User Model
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub created_at: Timestamp,
}

/// A user row joined with its stored credential digest, fetched for login.
#[derive(Debug, Clone)]
pub(crate) struct UserCredentials {
    pub user: User,
    pub password_hash: String,
    pub password_salt: String,
}
