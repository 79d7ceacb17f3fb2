//! Store constructors over JSON file tables

use std::path::PathBuf;
use std::sync::Arc;

use tracing::info;

use token_core::{RefreshTokenRecord, RefreshTokenStore, RevocationStore};
use token_shared::StorageConfig;

use super::json_file::JsonFileTable;

/// Revocation store persisted to a JSON file
pub type FileRevocationStore = RevocationStore<JsonFileTable<bool>>;

/// Refresh token store persisted to a JSON file
pub type FileRefreshTokenStore = RefreshTokenStore<JsonFileTable<RefreshTokenRecord>>;

/// Open the revocation store backed by `path`
pub fn open_revocation_store(path: impl Into<PathBuf>) -> FileRevocationStore {
    RevocationStore::new(JsonFileTable::new(path))
}

/// Open the refresh token store backed by `path`
pub fn open_refresh_token_store(path: impl Into<PathBuf>) -> FileRefreshTokenStore {
    RefreshTokenStore::new(JsonFileTable::new(path))
}

/// Both stores, shared so they can be handed to a token service
pub struct TokenStores {
    pub revocations: Arc<FileRevocationStore>,
    pub refresh_tokens: Arc<FileRefreshTokenStore>,
}

/// Open both stores at the locations named by `config`
pub fn open_stores(config: &StorageConfig) -> TokenStores {
    let revocation_path = config.revocation_path();
    let refresh_path = config.refresh_path();
    info!(
        revocations = %revocation_path.display(),
        refresh_tokens = %refresh_path.display(),
        "Opening token stores"
    );

    TokenStores {
        revocations: Arc::new(open_revocation_store(revocation_path)),
        refresh_tokens: Arc::new(open_refresh_token_store(refresh_path)),
    }
}
