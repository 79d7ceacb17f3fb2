//! JSON file implementation of the KeyValueTable trait.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io::{self, Write};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tempfile::NamedTempFile;
use tracing::{debug, warn};

use token_core::errors::{StorageError, StorageResult};
use token_core::KeyValueTable;

/// Table persisted as one JSON object in a file
///
/// A missing file is created holding `{}` on first load, along with any
/// missing parent directories. A file that exists but does not parse is
/// reported as corrupt and never rewritten by this table.
#[derive(Debug)]
pub struct JsonFileTable<V> {
    path: PathBuf,
    _value: PhantomData<fn() -> V>,
}

impl<V> JsonFileTable<V> {
    /// Create a table backed by `path`; nothing is touched until first use
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _value: PhantomData,
        }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: io::Error) -> StorageError {
        StorageError::io(self.path.display(), source)
    }

    fn parent_dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }
}

impl<V: Serialize> JsonFileTable<V> {
    /// Replace the file contents atomically: write a sibling temp file, flush
    /// it to disk, then rename it over the target
    fn write_entries(&self, entries: &HashMap<String, V>) -> StorageResult<()> {
        // Sorted keys keep the file stable across rewrites
        let sorted: BTreeMap<&String, &V> = entries.iter().collect();
        let mut bytes = serde_json::to_vec(&sorted).map_err(|e| StorageError::Serialize {
            location: self.path.display().to_string(),
            reason: e.to_string(),
        })?;
        bytes.push(b'\n');

        let dir = self.parent_dir();
        fs::create_dir_all(dir).map_err(|e| self.io_error(e))?;

        let mut temp = NamedTempFile::new_in(dir).map_err(|e| self.io_error(e))?;
        temp.write_all(&bytes).map_err(|e| self.io_error(e))?;
        temp.as_file().sync_all().map_err(|e| self.io_error(e))?;
        temp.persist(&self.path).map_err(|e| self.io_error(e.error))?;

        debug!(path = %self.path.display(), entries = entries.len(), "Table persisted");
        Ok(())
    }
}

impl<V> KeyValueTable<V> for JsonFileTable<V>
where
    V: Serialize + DeserializeOwned,
{
    fn location(&self) -> String {
        self.path.display().to_string()
    }

    fn load_all(&mut self) -> StorageResult<HashMap<String, V>> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "Table file missing, creating it empty");
                let empty = HashMap::new();
                self.write_entries(&empty)?;
                return Ok(empty);
            }
            Err(e) => return Err(self.io_error(e)),
        };

        serde_json::from_slice(&bytes).map_err(|e| {
            warn!(path = %self.path.display(), error = %e, "Table file is corrupt");
            StorageError::corrupt(self.path.display(), e)
        })
    }

    fn persist_all(&mut self, entries: &HashMap<String, V>) -> StorageResult<()> {
        self.write_entries(entries)
    }
}
