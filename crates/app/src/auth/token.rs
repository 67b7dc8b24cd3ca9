//! API token formatting, parsing, and hashing.

use rand::{RngCore, rngs::OsRng};
use sha2::{Digest, Sha256};
use thiserror::Error;
use zeroize::Zeroize;

/// API token identifier prefix.
pub const API_TOKEN_PREFIX: &str = "sf";

/// Number of secret bytes encoded in a token.
pub const API_TOKEN_SECRET_BYTES: usize = 32;

const API_TOKEN_SECRET_HEX_CHARS: usize = API_TOKEN_SECRET_BYTES * 2;

/// Raw token secret material, wiped from memory on drop.
pub(crate) struct ApiTokenSecret {
    bytes: [u8; API_TOKEN_SECRET_BYTES],
}

impl ApiTokenSecret {
    #[must_use]
    pub(crate) fn generate() -> Self {
        let mut bytes = [0_u8; API_TOKEN_SECRET_BYTES];

        OsRng.fill_bytes(&mut bytes);

        Self { bytes }
    }

    #[must_use]
    pub(crate) fn to_hex(&self) -> String {
        hex_encode(&self.bytes)
    }
}

impl Drop for ApiTokenSecret {
    fn drop(&mut self) {
        self.bytes.zeroize();
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiTokenError {
    #[error("malformed api token")]
    Malformed,
}

/// Render a secret as a presentable bearer token, e.g. `sf_<64 hex chars>`.
pub(crate) fn format_api_token(secret: &ApiTokenSecret) -> String {
    format!("{API_TOKEN_PREFIX}_{}", secret.to_hex())
}

/// Structural check run before touching storage, so garbage input never
/// costs a query.
pub(crate) fn validate_api_token_shape(token: &str) -> Result<(), ApiTokenError> {
    let secret = token
        .strip_prefix(API_TOKEN_PREFIX)
        .and_then(|rest| rest.strip_prefix('_'))
        .ok_or(ApiTokenError::Malformed)?;

    if secret.len() != API_TOKEN_SECRET_HEX_CHARS
        || !secret.bytes().all(|byte| byte.is_ascii_hexdigit())
    {
        return Err(ApiTokenError::Malformed);
    }

    Ok(())
}

/// Digest stored (and looked up) in place of the raw token.
pub(crate) fn hash_api_token(token: &str) -> String {
    format!("{:x}", Sha256::digest(token.as_bytes()))
}

pub(crate) fn hex_encode(bytes: &[u8]) -> String {
    use std::fmt::Write as _;

    bytes.iter().fold(
        String::with_capacity(bytes.len() * 2),
        |mut output, byte| {
            let _ = write!(output, "{byte:02x}");
            output
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formatted_token_has_the_expected_shape() {
        let token = format_api_token(&ApiTokenSecret::generate());

        assert!(token.starts_with("sf_"));
        assert_eq!(token.len(), 3 + API_TOKEN_SECRET_HEX_CHARS);
        assert!(validate_api_token_shape(&token).is_ok());
    }

    #[test]
    fn generated_secrets_differ() {
        assert_ne!(
            ApiTokenSecret::generate().to_hex(),
            ApiTokenSecret::generate().to_hex()
        );
    }

    #[test]
    fn shape_check_rejects_wrong_prefix() {
        assert_eq!(
            validate_api_token_shape("xx_0000"),
            Err(ApiTokenError::Malformed)
        );
    }

    #[test]
    fn shape_check_rejects_short_and_non_hex_secrets() {
        assert_eq!(
            validate_api_token_shape("sf_abc123"),
            Err(ApiTokenError::Malformed)
        );

        let non_hex = format!("sf_{}", "g".repeat(API_TOKEN_SECRET_HEX_CHARS));

        assert_eq!(
            validate_api_token_shape(&non_hex),
            Err(ApiTokenError::Malformed)
        );
    }

    #[test]
    fn hashing_is_stable_and_token_free() {
        let token = "sf_0123";
        let hash = hash_api_token(token);

        assert_eq!(hash, hash_api_token(token));
        assert!(!hash.contains("0123"));
    }

    #[test]
    fn hex_encode_pads_low_bytes() {
        assert_eq!(hex_encode(&[0x00, 0x0f, 0xff]), "000fff");
    }
}
