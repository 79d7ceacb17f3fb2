//! Key-value table abstraction beneath the token stores.
//!
//! A table is the whole persisted entry set of one store. Stores load the full
//! table, mutate it in memory and persist it back while holding their lock, so a
//! backend only needs to provide `load_all` and `persist_all`; the single-key
//! helpers are built on top of those.

mod memory;

pub use memory::MemoryTable;

use std::collections::HashMap;

use crate::errors::StorageResult;

/// Backing medium for one store's entries, keyed by string
///
/// Implementations are not expected to synchronize internally: every store
/// wraps its table in a mutex and hands out `&mut` access one call at a time.
pub trait KeyValueTable<V>: Send {
    /// Human-readable location used in errors and logs (a path, a URL, ...)
    fn location(&self) -> String;

    /// Load every entry
    ///
    /// A medium that does not exist yet is created empty. Content that cannot
    /// be parsed must fail with `StorageError::Corrupt` and stay untouched.
    fn load_all(&mut self) -> StorageResult<HashMap<String, V>>;

    /// Replace the persisted entries with `entries`
    fn persist_all(&mut self, entries: &HashMap<String, V>) -> StorageResult<()>;

    /// Fetch one entry
    fn get(&mut self, key: &str) -> StorageResult<Option<V>> {
        Ok(self.load_all()?.remove(key))
    }

    /// Insert or overwrite one entry
    fn set(&mut self, key: &str, value: V) -> StorageResult<()> {
        let mut entries = self.load_all()?;
        entries.insert(key.to_string(), value);
        self.persist_all(&entries)
    }

    /// Remove one entry, returning whether it existed
    fn delete(&mut self, key: &str) -> StorageResult<bool> {
        let mut entries = self.load_all()?;
        if entries.remove(key).is_none() {
            return Ok(false);
        }
        self.persist_all(&entries)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests;
