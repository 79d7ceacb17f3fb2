//! # Token Core
//!
//! Token lifecycle engine: issuing, validating, refreshing and revoking
//! compact HS256-signed tokens.
//! This crate contains the domain entities, the codec and signer, the
//! validation pipeline, the store abstractions and error types. File-backed
//! tables live in the infrastructure crate.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::{
    Header, Payload, RefreshTokenRecord, ALG_HS256, DEFAULT_ACCESS_TOKEN_TTL_SECONDS,
    DEFAULT_DISPLAY_NAME, TYP_JWT,
};
pub use errors::{StorageError, StorageResult, TokenError, TokenResult};
pub use repositories::{
    KeyValueTable, MemoryTable, RefreshTokenRepository, RefreshTokenStore, RevocationRepository,
    RevocationStore,
};
pub use services::{
    decode_segment, encode_segment, issue, sign, signing_input, verify, RefreshFlow,
    TokenSegment, TokenService, TokenServiceConfig, TokenValidator,
};
