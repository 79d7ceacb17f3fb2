//! Services containing the token lifecycle logic.

pub mod token;

// Re-export commonly used types
pub use token::{
    decode_segment, encode_segment, issue, sign, signing_input, verify, RefreshFlow,
    TokenSegment, TokenService, TokenServiceConfig, TokenValidator,
};
