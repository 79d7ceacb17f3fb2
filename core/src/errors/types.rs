//! Token and storage error definitions
//!
//! Validation is a short-circuit pipeline, so each failure maps to exactly one
//! variant below. Storage failures are kept in their own enum and bridged into
//! [`TokenError`] so callers of the token operations see a single type.

use thiserror::Error;

/// Failures of the backing medium behind a store
#[derive(Error, Debug)]
pub enum StorageError {
    /// The medium could not be read or written
    #[error("Storage I/O failure at {location}: {source}")]
    Io {
        location: String,
        #[source]
        source: std::io::Error,
    },

    /// Existing content could not be parsed; it is left untouched
    #[error("Corrupt store at {location}: {reason}")]
    Corrupt { location: String, reason: String },

    /// The in-memory table could not be serialized for persisting
    #[error("Failed to serialize table for {location}: {reason}")]
    Serialize { location: String, reason: String },
}

impl StorageError {
    /// Builds an I/O error for the given location
    pub fn io(location: impl std::fmt::Display, source: std::io::Error) -> Self {
        StorageError::Io {
            location: location.to_string(),
            source,
        }
    }

    /// Builds a corrupt-store error for the given location
    pub fn corrupt(location: impl std::fmt::Display, reason: impl std::fmt::Display) -> Self {
        StorageError::Corrupt {
            location: location.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Whether this is a corrupt-store failure
    pub fn is_corrupt(&self) -> bool {
        matches!(self, StorageError::Corrupt { .. })
    }
}

/// Token lifecycle errors
#[derive(Error, Debug)]
pub enum TokenError {
    #[error("Failed to encode token segment: {message}")]
    Encoding { message: String },

    #[error("Malformed token: expected three non-empty segments")]
    MalformedToken,

    #[error("Failed to decode token segment: {message}")]
    Decode { message: String },

    #[error("Token signature mismatch")]
    SignatureMismatch,

    #[error("Token expired")]
    TokenExpired,

    #[error("Token revoked")]
    TokenRevoked,

    #[error("Invalid refresh token")]
    InvalidRefreshToken,

    #[error("Refresh token expired")]
    RefreshTokenExpired,

    #[error("Signing failed: {message}")]
    SigningFailed { message: String },

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl TokenError {
    /// Whether the failure came from a corrupt backing store
    pub fn is_corrupt_store(&self) -> bool {
        matches!(self, TokenError::Storage(e) if e.is_corrupt())
    }

    /// Whether the failure came from the backing medium at all
    pub fn is_storage(&self) -> bool {
        matches!(self, TokenError::Storage(_))
    }
}
