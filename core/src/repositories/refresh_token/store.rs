//! Refresh token store over a key-value table

use std::sync::{Mutex, MutexGuard, PoisonError};

use rand::RngCore;
use tracing::{debug, info};

use crate::domain::entities::token::RefreshTokenRecord;
use crate::errors::{StorageResult, TokenError, TokenResult};
use crate::repositories::redact;
use crate::repositories::table::KeyValueTable;

use super::r#trait::RefreshTokenRepository;

/// Random bytes per refresh token (256 bits)
pub const REFRESH_TOKEN_BYTES: usize = 32;

/// Generate an opaque refresh token: 256 random bits as 64 lowercase hex chars
pub fn generate_refresh_token() -> String {
    let mut bytes = [0u8; REFRESH_TOKEN_BYTES];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// Persisted registry of refresh tokens (token -> record)
///
/// Like the revocation store, each call holds the lock across the full
/// load, mutate and persist cycle.
pub struct RefreshTokenStore<T> {
    table: Mutex<T>,
}

impl<T: KeyValueTable<RefreshTokenRecord>> RefreshTokenStore<T> {
    /// Creates a store owning `table`
    pub fn new(table: T) -> Self {
        Self {
            table: Mutex::new(table),
        }
    }

    fn lock(&self) -> MutexGuard<'_, T> {
        self.table.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Number of records on file, expired ones included
    pub fn len(&self) -> StorageResult<usize> {
        let mut table = self.lock();
        Ok(table.load_all()?.len())
    }

    /// Whether the registry holds no records
    pub fn is_empty(&self) -> StorageResult<bool> {
        Ok(self.len()? == 0)
    }

    /// Consume the store, returning the underlying table
    pub fn into_inner(self) -> T {
        self.table.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T: KeyValueTable<RefreshTokenRecord>> RefreshTokenRepository for RefreshTokenStore<T> {
    fn issue_at(&self, user_id: &str, ttl_seconds: i64, now: i64) -> StorageResult<String> {
        let mut table = self.lock();
        let mut entries = table.load_all()?;

        let mut token = generate_refresh_token();
        while entries.contains_key(&token) {
            token = generate_refresh_token();
        }

        let record = RefreshTokenRecord::new(token.clone(), user_id, ttl_seconds, now);
        debug!(
            token = %redact(&token),
            user_id = %user_id,
            expires_at = record.expires_at,
            "Issuing refresh token"
        );
        entries.insert(token.clone(), record);
        table.persist_all(&entries)?;

        Ok(token)
    }

    fn consume_at(&self, refresh_token: &str, now: i64) -> TokenResult<RefreshTokenRecord> {
        let mut table = self.lock();
        let mut entries = table.load_all()?;

        let record = entries
            .get(refresh_token)
            .cloned()
            .ok_or(TokenError::InvalidRefreshToken)?;

        if record.is_expired_at(now) {
            entries.remove(refresh_token);
            table.persist_all(&entries)?;
            info!(
                token = %redact(refresh_token),
                user_id = %record.user_id,
                "Deleted expired refresh token"
            );
            return Err(TokenError::RefreshTokenExpired);
        }

        Ok(record)
    }

    fn invalidate(&self, refresh_token: &str) -> StorageResult<bool> {
        let mut table = self.lock();
        let removed = table.delete(refresh_token)?;
        if removed {
            debug!(token = %redact(refresh_token), "Invalidated refresh token");
        }
        Ok(removed)
    }

    fn purge_expired_at(&self, now: i64) -> StorageResult<usize> {
        let mut table = self.lock();
        let mut entries = table.load_all()?;
        let before = entries.len();

        entries.retain(|_, record| !record.is_expired_at(now));
        let purged = before - entries.len();
        if purged > 0 {
            table.persist_all(&entries)?;
            info!(purged, location = %table.location(), "Purged expired refresh tokens");
        }

        Ok(purged)
    }
}
