//! Local, unverified decoding of the access token payload.
//!
//! The claims are display data only. Nothing here checks the signature, issuer
//! or expiry; the remote API stays the authority on whether a token is valid.

use super::cookies;
use axum_extra::extract::CookieJar;
use base64ct::{Base64UrlUnpadded, Encoding};
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::debug;

/// Decoded token payload.
pub type Claims = Map<String, Value>;

#[derive(Debug, Error)]
pub enum IdentityError {
    #[error("invalid token format")]
    TokenFormat,
    #[error("invalid base64url encoding")]
    Base64,
    #[error("invalid json")]
    Json(#[from] serde_json::Error),
    #[error("token payload is not an object")]
    NotAnObject,
}

/// Decode the payload segment of a compact JWT (`header.payload.signature`).
///
/// # Errors
/// Returns an error if the token does not have three segments, the payload is
/// not base64url, or it does not decode to a JSON object.
pub fn decode_claims(token: &str) -> Result<Claims, IdentityError> {
    let mut segments = token.trim().split('.');
    let (Some(_header), Some(payload), Some(_signature), None) = (
        segments.next(),
        segments.next(),
        segments.next(),
        segments.next(),
    ) else {
        return Err(IdentityError::TokenFormat);
    };

    // Some issuers keep base64 padding on the payload segment.
    let payload = payload.trim_end_matches('=');
    let bytes = Base64UrlUnpadded::decode_vec(payload).map_err(|_| IdentityError::Base64)?;

    match serde_json::from_slice(&bytes)? {
        Value::Object(claims) => Ok(claims),
        _ => Err(IdentityError::NotAnObject),
    }
}

/// Claims of the access token in `jar`, or `None` when it is absent or
/// undecodable.
#[must_use]
pub fn current_claims(jar: &CookieJar) -> Option<Claims> {
    let token = cookies::access_token(jar)?;
    match decode_claims(token) {
        Ok(claims) => Some(claims),
        Err(err) => {
            debug!("Ignoring undecodable access token: {err}");
            None
        }
    }
}
