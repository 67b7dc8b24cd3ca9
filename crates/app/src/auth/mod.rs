//! Authentication
//!
//! Opaque bearer API tokens: login issues a random secret whose SHA-256
//! digest is stored, and requests are authenticated by hashing the
//! presented token and looking the digest up.

pub mod errors;
pub mod models;
pub(crate) mod repository;
pub mod service;
pub(crate) mod token;

pub use errors::AuthServiceError;
pub use models::{ApiToken, IssuedApiToken};
pub use service::*;
pub use token::API_TOKEN_PREFIX;
