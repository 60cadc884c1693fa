use axum::http::{header::AUTHORIZATION, HeaderMap};
use rand::RngCore;
use sha2::{Digest, Sha256};
use thiserror::Error;

/// Scheme that must prefix every API key in the Authorization header
pub const API_KEY_SCHEME: &str = "ApiKey";

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    #[error("no authorization header included")]
    NoAuthHeader,

    #[error("malformed authorization header")]
    MalformedAuthHeader,
}

/// Extract the API key from `Authorization: ApiKey <token>`.
///
/// Only the first Authorization value is considered. `HeaderMap` lookups are
/// already case-insensitive on the header name.
pub fn get_api_key(headers: &HeaderMap) -> Result<String, AuthError> {
    let value = match headers.get(AUTHORIZATION) {
        Some(value) if !value.is_empty() => value,
        _ => return Err(AuthError::NoAuthHeader),
    };

    // Tokens may be any UTF-8, not only visible ASCII
    let value = std::str::from_utf8(value.as_bytes()).map_err(|_| AuthError::MalformedAuthHeader)?;

    let mut parts = value.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some(API_KEY_SCHEME), Some(key), None) => Ok(key.to_string()),
        _ => Err(AuthError::MalformedAuthHeader),
    }
}

/// Generate a fresh credential: SHA-256 of 32 random bytes, lowercase hex.
pub fn generate_random_sha256_hash() -> String {
    let mut bytes = [0u8; 32];
    rand::thread_rng().fill_bytes(&mut bytes);
    format!("{:x}", Sha256::digest(bytes))
}
