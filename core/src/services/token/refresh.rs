//! Refresh flow: trade a live refresh token for a new access token

use chrono::Utc;
use tracing::debug;

use crate::domain::entities::token::{Header, Payload};
use crate::errors::TokenResult;
use crate::repositories::RefreshTokenRepository;

use super::issuer::issue;

/// Mints access tokens from refresh tokens
///
/// Only the subject survives a refresh: the record carries no display name,
/// so the new token gets the configured one instead.
pub struct RefreshFlow<'a, R: RefreshTokenRepository + ?Sized> {
    refresh_tokens: &'a R,
    access_token_ttl_seconds: i64,
    display_name: &'a str,
}

impl<'a, R: RefreshTokenRepository + ?Sized> RefreshFlow<'a, R> {
    /// Creates a flow over `refresh_tokens`
    pub fn new(refresh_tokens: &'a R, access_token_ttl_seconds: i64, display_name: &'a str) -> Self {
        Self {
            refresh_tokens,
            access_token_ttl_seconds,
            display_name,
        }
    }

    /// Refresh with the current time
    pub fn refresh_access_token(&self, refresh_token: &str, secret: &[u8]) -> TokenResult<String> {
        self.refresh_access_token_at(refresh_token, secret, Utc::now().timestamp())
    }

    /// Refresh as of `now`
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - A new signed access token for the record's subject
    /// * `Err(TokenError::InvalidRefreshToken)` - Unknown refresh token
    /// * `Err(TokenError::RefreshTokenExpired)` - Expired; the record is deleted
    /// * `Err(TokenError::Storage)` - The registry could not be read or written
    pub fn refresh_access_token_at(
        &self,
        refresh_token: &str,
        secret: &[u8],
        now: i64,
    ) -> TokenResult<String> {
        let record = self.refresh_tokens.consume_at(refresh_token, now)?;

        let payload = Payload::new(
            record.user_id.as_str(),
            self.display_name,
            self.access_token_ttl_seconds,
            now,
        );
        debug!(user_id = %record.user_id, exp = payload.exp, "Minting access token from refresh token");

        issue(&Header::hs256(), &payload, secret)
    }
}
