//! Revocation repository trait: the set of revoked full-token strings.

use crate::errors::StorageResult;

/// Repository of revoked tokens
///
/// Entries are keyed by the exact token string, signature included, so
/// revoking one token never affects another token for the same subject.
/// Entries never expire on their own.
pub trait RevocationRepository: Send + Sync {
    /// Mark a token as revoked
    ///
    /// Idempotent: revoking an already revoked token succeeds and leaves a
    /// single entry.
    ///
    /// # Example
    /// ```no_run
    /// # use token_core::repositories::{RevocationRepository, RevocationStore, MemoryTable};
    /// let store = RevocationStore::new(MemoryTable::new("revoked"));
    /// store.revoke("header.payload.signature")?;
    /// assert!(store.is_revoked("header.payload.signature")?);
    /// # Ok::<(), token_core::errors::StorageError>(())
    /// ```
    fn revoke(&self, token: &str) -> StorageResult<()>;

    /// Check whether a token has been revoked
    ///
    /// # Returns
    /// * `Ok(true)` - The exact token string is present
    /// * `Ok(false)` - Not revoked
    /// * `Err(StorageError)` - The medium could not be read or is corrupt
    fn is_revoked(&self, token: &str) -> StorageResult<bool>;
}
