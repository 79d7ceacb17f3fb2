//! Token validation pipeline
//!
//! Stages run strictly in order and stop at the first failure:
//!
//! 1. revocation - the literal token string must not be revoked
//! 2. format - exactly three non-empty `.`-separated segments
//! 3. decode - header and payload must be valid base64url JSON
//! 4. signature - HMAC over `header.payload` must match, compared in constant time
//! 5. expiry - `exp < now` is expired; `exp == now` is still accepted
//!
//! Only a fully successful run hands the payload back.

use chrono::Utc;
use tracing::debug;

use crate::domain::entities::token::{Header, Payload};
use crate::errors::{TokenError, TokenResult};
use crate::repositories::RevocationRepository;

use super::codec::decode_segment;
use super::signer::verify;

/// Validates tokens against a revocation repository
pub struct TokenValidator<'a, R: RevocationRepository + ?Sized> {
    revocations: &'a R,
}

impl<'a, R: RevocationRepository + ?Sized> TokenValidator<'a, R> {
    /// Creates a validator that consults `revocations` first
    pub fn new(revocations: &'a R) -> Self {
        Self { revocations }
    }

    /// Validate `token` with the current time
    pub fn validate(&self, token: &str, secret: &[u8]) -> TokenResult<Payload> {
        self.validate_at(token, secret, Utc::now().timestamp())
    }

    /// Validate `token` as of `now` (unix seconds)
    pub fn validate_at(&self, token: &str, secret: &[u8], now: i64) -> TokenResult<Payload> {
        if self.revocations.is_revoked(token)? {
            debug!("Token rejected: revoked");
            return Err(TokenError::TokenRevoked);
        }

        let (header_segment, payload_segment, signature) = split_segments(token)?;

        // The header's values are not checked against HS256; it only has to decode.
        let _header: Header = decode_segment(header_segment)?;
        let payload: Payload = decode_segment(payload_segment)?;

        let signed = format!("{header_segment}.{payload_segment}");
        if !verify(&signed, secret, signature)? {
            debug!("Token rejected: signature mismatch");
            return Err(TokenError::SignatureMismatch);
        }

        if payload.is_expired_at(now) {
            debug!(exp = payload.exp, now, "Token rejected: expired");
            return Err(TokenError::TokenExpired);
        }

        Ok(payload)
    }
}

/// Split a token into its three segments, rejecting empty ones
pub fn split_segments(token: &str) -> TokenResult<(&str, &str, &str)> {
    let segments: Vec<&str> = token.split('.').collect();
    match segments.as_slice() {
        [header, payload, signature]
            if !header.is_empty() && !payload.is_empty() && !signature.is_empty() =>
        {
            Ok((*header, *payload, *signature))
        }
        _ => Err(TokenError::MalformedToken),
    }
}
