//! User Data

/// New User Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Raw password; hashed with a fresh salt before it reaches storage.
    pub password: String,
}
