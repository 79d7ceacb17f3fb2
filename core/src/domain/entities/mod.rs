//! Domain entities representing the token artifacts.

pub mod token;

// Re-export commonly used types
pub use token::{
    Header, Payload, RefreshTokenRecord,
    ALG_HS256, TYP_JWT, DEFAULT_ACCESS_TOKEN_TTL_SECONDS, DEFAULT_DISPLAY_NAME,
};
