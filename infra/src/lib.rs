//! # Infrastructure Layer
//!
//! Concrete storage for the token stores defined in `token_core`.
//!
//! ## Architecture
//!
//! - **Storage**: a JSON-file [`KeyValueTable`](token_core::KeyValueTable)
//!   backend, one file per store
//! - **Stores**: constructors wiring file tables into the revocation and
//!   refresh token stores from a [`StorageConfig`](token_shared::StorageConfig)

// Re-export core error types for convenience
pub use token_core::errors::{StorageError, StorageResult};

/// Storage module - file-backed tables and store constructors
pub mod storage;

pub use storage::{
    open_refresh_token_store, open_revocation_store, open_stores, FileRefreshTokenStore,
    FileRevocationStore, JsonFileTable, TokenStores,
};
