//! Token service module
//!
//! This module handles all token-related operations including:
//! - Segment encoding/decoding and HS256 signing
//! - The ordered validation pipeline
//! - Refreshing access tokens from the refresh token registry
//! - Revocation

mod codec;
mod config;
mod issuer;
mod refresh;
mod service;
mod signer;
mod validator;

#[cfg(test)]
mod tests;

pub use codec::{decode_segment, encode_segment, TokenSegment};
pub use config::TokenServiceConfig;
pub use issuer::{issue, signing_input};
pub use refresh::RefreshFlow;
pub use service::TokenService;
pub use signer::{sign, verify};
pub use validator::{split_segments, TokenValidator};
