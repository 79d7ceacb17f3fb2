//! Storage locations for the persisted token tables

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where the revocation list and refresh-token registry live on disk
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Directory holding both table files
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// File name of the revocation table
    #[serde(default = "default_revocation_file")]
    pub revocation_file: String,

    /// File name of the refresh-token table
    #[serde(default = "default_refresh_file")]
    pub refresh_file: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            revocation_file: default_revocation_file(),
            refresh_file: default_refresh_file(),
        }
    }
}

impl StorageConfig {
    /// Create a storage configuration rooted at `data_dir`
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Default::default()
        }
    }

    /// Full path of the revocation table
    pub fn revocation_path(&self) -> PathBuf {
        self.data_dir.join(&self.revocation_file)
    }

    /// Full path of the refresh-token table
    pub fn refresh_path(&self) -> PathBuf {
        self.data_dir.join(&self.refresh_file)
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_revocation_file() -> String {
    String::from("revoked_tokens.json")
}

fn default_refresh_file() -> String {
    String::from("refresh_tokens.json")
}
