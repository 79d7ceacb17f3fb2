//! In-process table, used for tests and for deployments that accept
//! losing revocations on restart.

use std::collections::HashMap;

use crate::errors::StorageResult;

use super::KeyValueTable;

/// Table held entirely in memory
#[derive(Debug, Clone)]
pub struct MemoryTable<V> {
    name: String,
    entries: HashMap<String, V>,
}

impl<V> MemoryTable<V> {
    /// Create an empty table; `name` shows up as its location
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: HashMap::new(),
        }
    }

    /// Number of entries currently held
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<V> Default for MemoryTable<V> {
    fn default() -> Self {
        Self::new("memory")
    }
}

impl<V: Clone + Send> KeyValueTable<V> for MemoryTable<V> {
    fn location(&self) -> String {
        format!("memory:{}", self.name)
    }

    fn load_all(&mut self) -> StorageResult<HashMap<String, V>> {
        Ok(self.entries.clone())
    }

    fn persist_all(&mut self, entries: &HashMap<String, V>) -> StorageResult<()> {
        self.entries = entries.clone();
        Ok(())
    }

    fn get(&mut self, key: &str) -> StorageResult<Option<V>> {
        Ok(self.entries.get(key).cloned())
    }
}
