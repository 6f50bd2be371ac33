//! Shared-secret API key check
//!
//! Mutating endpoints accept the key either in the `x-api-key` header or
//! as an `api_key` field in the JSON body. The check is pure and
//! stateless: no rate limiting, no key rotation, no per-key identity.

use axum::http::HeaderMap;
use thiserror::Error;

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "x-api-key";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiKeyError {
    #[error(
        "API key required. Send it in the \"{API_KEY_HEADER}\" header \
         or as \"api_key\" in the request body"
    )]
    Missing,

    #[error("invalid API key")]
    Invalid,
}

/// Verify a candidate key against the configured secret.
pub fn verify_api_key(candidate: Option<&str>, expected: &str) -> Result<(), ApiKeyError> {
    match candidate {
        None => Err(ApiKeyError::Missing),
        Some(key) if key == expected => Ok(()),
        Some(_) => Err(ApiKeyError::Invalid),
    }
}

/// Pull the candidate key out of the request and verify it.
///
/// The header wins over the body field when both are present.
pub fn require_api_key(
    headers: &HeaderMap,
    body_key: Option<&str>,
    expected: &str,
) -> Result<(), ApiKeyError> {
    let header_key = headers.get(API_KEY_HEADER).and_then(|v| v.to_str().ok());
    verify_api_key(header_key.or(body_key), expected)
}
