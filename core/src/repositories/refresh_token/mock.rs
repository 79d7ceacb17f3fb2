//! Mock implementation of RefreshTokenRepository for testing

use std::collections::HashMap;
use std::io;
use std::sync::Mutex;

use crate::domain::entities::token::RefreshTokenRecord;
use crate::errors::{StorageError, StorageResult, TokenError, TokenResult};

use super::r#trait::RefreshTokenRepository;

/// Mock refresh token repository that can be told to fail like a broken disk
pub struct MockRefreshTokenRepository {
    records: Mutex<HashMap<String, RefreshTokenRecord>>,
    fail_storage: bool,
}

impl MockRefreshTokenRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            records: Mutex::new(HashMap::new()),
            fail_storage: false,
        }
    }

    /// Every call fails with a storage I/O error
    pub fn failing() -> Self {
        Self {
            fail_storage: true,
            ..Self::new()
        }
    }

    /// Seed a record directly
    pub fn with_record(self, record: RefreshTokenRecord) -> Self {
        self.records
            .lock()
            .unwrap()
            .insert(record.token.clone(), record);
        self
    }

    fn check(&self) -> StorageResult<()> {
        if self.fail_storage {
            return Err(StorageError::io(
                "mock",
                io::Error::new(io::ErrorKind::Other, "disk unavailable"),
            ));
        }
        Ok(())
    }
}

impl Default for MockRefreshTokenRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl RefreshTokenRepository for MockRefreshTokenRepository {
    fn issue_at(&self, user_id: &str, ttl_seconds: i64, now: i64) -> StorageResult<String> {
        self.check()?;
        let token = format!("mock-refresh-{}", self.records.lock().unwrap().len());
        let record = RefreshTokenRecord::new(token.clone(), user_id, ttl_seconds, now);
        self.records.lock().unwrap().insert(token.clone(), record);
        Ok(token)
    }

    fn consume_at(&self, refresh_token: &str, now: i64) -> TokenResult<RefreshTokenRecord> {
        self.check()?;
        let mut records = self.records.lock().unwrap();
        let record = records
            .get(refresh_token)
            .cloned()
            .ok_or(TokenError::InvalidRefreshToken)?;
        if record.is_expired_at(now) {
            records.remove(refresh_token);
            return Err(TokenError::RefreshTokenExpired);
        }
        Ok(record)
    }

    fn invalidate(&self, refresh_token: &str) -> StorageResult<bool> {
        self.check()?;
        Ok(self.records.lock().unwrap().remove(refresh_token).is_some())
    }

    fn purge_expired_at(&self, now: i64) -> StorageResult<usize> {
        self.check()?;
        let mut records = self.records.lock().unwrap();
        let before = records.len();
        records.retain(|_, record| !record.is_expired_at(now));
        Ok(before - records.len())
    }
}
