//! Main token service implementation

use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use crate::domain::entities::token::{Header, Payload};
use crate::errors::{StorageResult, TokenResult};
use crate::repositories::{RefreshTokenRepository, RevocationRepository};

use super::config::TokenServiceConfig;
use super::issuer::issue;
use super::refresh::RefreshFlow;
use super::validator::TokenValidator;

/// Service tying the codec, signer and both stores together
///
/// The signing secret is passed per call rather than held by the service.
pub struct TokenService<V, F>
where
    V: RevocationRepository,
    F: RefreshTokenRepository,
{
    revocations: Arc<V>,
    refresh_tokens: Arc<F>,
    config: TokenServiceConfig,
}

impl<V, F> TokenService<V, F>
where
    V: RevocationRepository,
    F: RefreshTokenRepository,
{
    /// Creates a new token service instance
    ///
    /// # Arguments
    ///
    /// * `revocations` - Revocation list consulted before every validation
    /// * `refresh_tokens` - Refresh token registry
    /// * `config` - Token lifetimes and refresh display name
    pub fn new(revocations: Arc<V>, refresh_tokens: Arc<F>, config: TokenServiceConfig) -> Self {
        Self {
            revocations,
            refresh_tokens,
            config,
        }
    }

    /// Service configuration
    pub fn config(&self) -> &TokenServiceConfig {
        &self.config
    }

    /// Sign a caller-built header and payload into a token
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The three-segment token
    /// * `Err(TokenError::Encoding)` - A segment could not be serialized
    pub fn issue(&self, header: &Header, payload: &Payload, secret: &str) -> TokenResult<String> {
        issue(header, payload, secret.as_bytes())
    }

    /// Mint an access token for `subject` with the configured lifetime
    pub fn issue_access_token(&self, subject: &str, name: &str, secret: &str) -> TokenResult<String> {
        let payload = Payload::new(
            subject,
            name,
            self.config.access_token_ttl_seconds,
            Utc::now().timestamp(),
        );
        self.issue(&Header::hs256(), &payload, secret)
    }

    /// Validate a token, returning its payload when every stage passes
    pub fn validate(&self, token: &str, secret: &str) -> TokenResult<Payload> {
        self.validate_at(token, secret, Utc::now().timestamp())
    }

    /// Validate a token as of `now`
    pub fn validate_at(&self, token: &str, secret: &str, now: i64) -> TokenResult<Payload> {
        TokenValidator::new(self.revocations.as_ref()).validate_at(token, secret.as_bytes(), now)
    }

    /// Revoke a token; revoking twice is harmless
    pub fn revoke(&self, token: &str) -> StorageResult<()> {
        self.revocations.revoke(token)?;
        info!("Token revoked");
        Ok(())
    }

    /// Check whether a token has been revoked
    pub fn is_revoked(&self, token: &str) -> StorageResult<bool> {
        self.revocations.is_revoked(token)
    }

    /// Issue a refresh token for `subject` valid for `ttl_seconds`
    pub fn issue_refresh_token(&self, subject: &str, ttl_seconds: i64) -> StorageResult<String> {
        self.refresh_tokens.issue(subject, ttl_seconds)
    }

    /// Issue a refresh token with the configured lifetime
    pub fn issue_default_refresh_token(&self, subject: &str) -> StorageResult<String> {
        self.issue_refresh_token(subject, self.config.refresh_token_ttl_seconds)
    }

    /// Trade a refresh token for a new access token
    pub fn refresh_access_token(&self, refresh_token: &str, secret: &str) -> TokenResult<String> {
        self.refresh_access_token_at(refresh_token, secret, Utc::now().timestamp())
    }

    /// Trade a refresh token for a new access token as of `now`
    pub fn refresh_access_token_at(
        &self,
        refresh_token: &str,
        secret: &str,
        now: i64,
    ) -> TokenResult<String> {
        RefreshFlow::new(
            self.refresh_tokens.as_ref(),
            self.config.access_token_ttl_seconds,
            &self.config.display_name,
        )
        .refresh_access_token_at(refresh_token, secret.as_bytes(), now)
    }

    /// Invalidate a refresh token before it expires (e.g. on logout)
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - The token existed and was removed
    /// * `Ok(false)` - Unknown token
    pub fn revoke_refresh_token(&self, refresh_token: &str) -> StorageResult<bool> {
        self.refresh_tokens.invalidate(refresh_token)
    }

    /// Remove expired refresh token records
    ///
    /// Expired records otherwise linger until someone tries to use them.
    pub fn purge_expired_refresh_tokens(&self) -> StorageResult<usize> {
        let purged = self.refresh_tokens.purge_expired()?;
        if purged > 0 {
            info!(purged, "Purged expired refresh tokens");
        }
        Ok(purged)
    }
}
