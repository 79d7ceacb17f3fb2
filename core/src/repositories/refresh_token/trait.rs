//! Refresh token repository trait defining the registry of opaque refresh tokens.

use chrono::Utc;

use crate::domain::entities::token::RefreshTokenRecord;
use crate::errors::{StorageResult, TokenResult};

/// Repository trait for refresh token records
///
/// Refresh tokens are opaque random strings, unrelated to any access token.
/// A token stays usable until it expires or is invalidated; consuming it does
/// not rotate it. Expired records are only removed when a lookup finds them or
/// when [`purge_expired_at`](RefreshTokenRepository::purge_expired_at) runs.
pub trait RefreshTokenRepository: Send + Sync {
    /// Issue a new refresh token for `user_id`, valid for `ttl_seconds` after `now`
    ///
    /// # Returns
    /// * `Ok(String)` - The opaque token handed to the caller
    /// * `Err(StorageError)` - The record could not be persisted
    fn issue_at(&self, user_id: &str, ttl_seconds: i64, now: i64) -> StorageResult<String>;

    /// Look up a refresh token as of `now`
    ///
    /// # Returns
    /// * `Ok(RefreshTokenRecord)` - Token is live; the record is kept
    /// * `Err(TokenError::InvalidRefreshToken)` - No such record
    /// * `Err(TokenError::RefreshTokenExpired)` - The record had expired and has
    ///   now been deleted; later lookups report `InvalidRefreshToken`
    /// * `Err(TokenError::Storage)` - The medium failed
    fn consume_at(&self, refresh_token: &str, now: i64) -> TokenResult<RefreshTokenRecord>;

    /// Delete a refresh token regardless of expiry, returning whether it existed
    fn invalidate(&self, refresh_token: &str) -> StorageResult<bool>;

    /// Delete every record expired as of `now`, returning how many were removed
    fn purge_expired_at(&self, now: i64) -> StorageResult<usize>;

    /// [`issue_at`](RefreshTokenRepository::issue_at) with the current time
    fn issue(&self, user_id: &str, ttl_seconds: i64) -> StorageResult<String> {
        self.issue_at(user_id, ttl_seconds, Utc::now().timestamp())
    }

    /// [`consume_at`](RefreshTokenRepository::consume_at) with the current time
    fn consume(&self, refresh_token: &str) -> TokenResult<RefreshTokenRecord> {
        self.consume_at(refresh_token, Utc::now().timestamp())
    }

    /// [`purge_expired_at`](RefreshTokenRepository::purge_expired_at) with the current time
    fn purge_expired(&self) -> StorageResult<usize> {
        self.purge_expired_at(Utc::now().timestamp())
    }
}
