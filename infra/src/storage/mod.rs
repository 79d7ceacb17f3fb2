//! Storage module - JSON file tables
//!
//! Each store persists to its own file holding a single JSON object keyed by
//! token string. Files are created on first use and rewritten whole on every
//! mutation.

pub mod json_file;
pub mod stores;


pub use json_file::JsonFileTable;
pub use stores::{
    open_refresh_token_store, open_revocation_store, open_stores, FileRefreshTokenStore,
    FileRevocationStore, TokenStores,
};
