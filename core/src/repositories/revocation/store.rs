//! Revocation store over a key-value table

use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::{debug, info};

use crate::errors::StorageResult;
use crate::repositories::redact;
use crate::repositories::table::KeyValueTable;

use super::r#trait::RevocationRepository;

/// Persisted set of revoked tokens (token string -> `true`)
///
/// Every call takes the store's lock for the whole load, mutate and persist
/// cycle, so calls on one store never interleave. There is no cross-process
/// locking.
pub struct RevocationStore<T> {
    table: Mutex<T>,
}

impl<T: KeyValueTable<bool>> RevocationStore<T> {
    /// Creates a store owning `table`
    pub fn new(table: T) -> Self {
        Self {
            table: Mutex::new(table),
        }
    }

    fn lock(&self) -> MutexGuard<'_, T> {
        // The table is re-read on every call, so a guard poisoned by a
        // panicking caller holds no state worth discarding.
        self.table.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Remove a revocation entry by hand, returning whether it was present
    pub fn prune(&self, token: &str) -> StorageResult<bool> {
        let mut table = self.lock();
        let removed = table.delete(token)?;
        if removed {
            info!(token = %redact(token), location = %table.location(), "Pruned revocation entry");
        }
        Ok(removed)
    }

    /// Number of revoked tokens on record
    pub fn len(&self) -> StorageResult<usize> {
        let mut table = self.lock();
        Ok(table.load_all()?.len())
    }

    /// Whether no token has been revoked
    pub fn is_empty(&self) -> StorageResult<bool> {
        Ok(self.len()? == 0)
    }

    /// Consume the store, returning the underlying table
    pub fn into_inner(self) -> T {
        self.table.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T: KeyValueTable<bool>> RevocationRepository for RevocationStore<T> {
    fn revoke(&self, token: &str) -> StorageResult<()> {
        let mut table = self.lock();
        let mut entries = table.load_all()?;
        if entries.insert(token.to_string(), true).is_none() {
            debug!(token = %redact(token), "Revoking token");
        }
        table.persist_all(&entries)
    }

    fn is_revoked(&self, token: &str) -> StorageResult<bool> {
        let mut table = self.lock();
        Ok(table.load_all()?.contains_key(token))
    }
}
