//! Configuration for the token service

use token_shared::AuthConfig;

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// Lifetime of access tokens minted by the service, in seconds
    pub access_token_ttl_seconds: i64,
    /// Lifetime of refresh tokens issued by the service, in seconds
    pub refresh_token_ttl_seconds: i64,
    /// Display name written into access tokens minted from a refresh token
    pub display_name: String,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self::from(&AuthConfig::default())
    }
}

impl From<&AuthConfig> for TokenServiceConfig {
    fn from(auth: &AuthConfig) -> Self {
        Self {
            access_token_ttl_seconds: auth.access_token_expiry,
            refresh_token_ttl_seconds: auth.refresh_token_expiry,
            display_name: auth.display_name.clone(),
        }
    }
}
