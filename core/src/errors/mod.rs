//! Error types for token issuance, validation and the persisted stores.

mod types;

pub use types::{StorageError, TokenError};

/// Result alias for token operations
pub type TokenResult<T> = Result<T, TokenError>;

/// Result alias for table/store operations
pub type StorageResult<T> = Result<T, StorageError>;
