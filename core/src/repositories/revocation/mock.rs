//! Mock implementation of RevocationRepository for testing

use std::collections::HashSet;
use std::sync::Mutex;

use crate::errors::{StorageError, StorageResult};

use super::r#trait::RevocationRepository;

/// Mock revocation repository
pub struct MockRevocationRepository {
    revoked: Mutex<HashSet<String>>,
    corrupt: bool,
}

impl MockRevocationRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            revoked: Mutex::new(HashSet::new()),
            corrupt: false,
        }
    }

    /// Every call fails as if the backing table could not be parsed
    pub fn corrupt() -> Self {
        Self {
            corrupt: true,
            ..Self::new()
        }
    }

    /// Number of distinct revoked tokens
    pub fn revoked_count(&self) -> usize {
        self.revoked.lock().unwrap().len()
    }
}

impl Default for MockRevocationRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl RevocationRepository for MockRevocationRepository {
    fn revoke(&self, token: &str) -> StorageResult<()> {
        if self.corrupt {
            return Err(StorageError::corrupt("mock", "unexpected end of input"));
        }
        self.revoked.lock().unwrap().insert(token.to_string());
        Ok(())
    }

    fn is_revoked(&self, token: &str) -> StorageResult<bool> {
        if self.corrupt {
            return Err(StorageError::corrupt("mock", "unexpected end of input"));
        }
        Ok(self.revoked.lock().unwrap().contains(token))
    }
}
