//! Authentication configuration

use serde::{Deserialize, Serialize};

const DEFAULT_SECRET: &str = "your-secret-key-change-in-production";

/// Access token lifetime when none is configured (1 hour)
pub const DEFAULT_ACCESS_TOKEN_EXPIRY: i64 = 3600;

/// Refresh token lifetime when none is configured (7 days)
pub const DEFAULT_REFRESH_TOKEN_EXPIRY: i64 = 7 * 24 * 60 * 60;

/// Display name written into access tokens minted from a refresh token
pub const DEFAULT_DISPLAY_NAME: &str = "token-holder";

/// Token signing and lifetime configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// HMAC secret used for signing tokens
    pub secret: String,

    /// Access token expiry time in seconds
    #[serde(default = "default_access_token_expiry")]
    pub access_token_expiry: i64,

    /// Refresh token expiry time in seconds
    #[serde(default = "default_refresh_token_expiry")]
    pub refresh_token_expiry: i64,

    /// Display name placed in access tokens minted by a refresh
    #[serde(default = "default_display_name")]
    pub display_name: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            secret: String::from(DEFAULT_SECRET),
            access_token_expiry: default_access_token_expiry(),
            refresh_token_expiry: default_refresh_token_expiry(),
            display_name: default_display_name(),
        }
    }
}

impl AuthConfig {
    /// Create a new configuration with the given secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Set access token expiry in minutes
    pub fn with_access_expiry_minutes(mut self, minutes: i64) -> Self {
        self.access_token_expiry = minutes.saturating_mul(60);
        self
    }

    /// Set refresh token expiry in days
    pub fn with_refresh_expiry_days(mut self, days: i64) -> Self {
        self.refresh_token_expiry = days.saturating_mul(86400);
        self
    }

    /// Set the display name used for refreshed access tokens
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = name.into();
        self
    }

    /// Check if using default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == DEFAULT_SECRET
    }
}

fn default_access_token_expiry() -> i64 {
    DEFAULT_ACCESS_TOKEN_EXPIRY
}

fn default_refresh_token_expiry() -> i64 {
    DEFAULT_REFRESH_TOKEN_EXPIRY
}

fn default_display_name() -> String {
    String::from(DEFAULT_DISPLAY_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_config_default() {
        let config = AuthConfig::default();
        assert_eq!(config.access_token_expiry, 3600);
        assert_eq!(config.refresh_token_expiry, 604800);
        assert_eq!(config.display_name, "token-holder");
        assert!(config.is_using_default_secret());
    }

    #[test]
    fn test_auth_config_builder() {
        let config = AuthConfig::new("my-secret")
            .with_access_expiry_minutes(30)
            .with_refresh_expiry_days(14)
            .with_display_name("service");

        assert_eq!(config.access_token_expiry, 1800);
        assert_eq!(config.refresh_token_expiry, 1209600);
        assert_eq!(config.display_name, "service");
        assert!(!config.is_using_default_secret());
    }

    #[test]
    fn test_builder_saturates_large_values() {
        let config = AuthConfig::new("s")
            .with_access_expiry_minutes(i64::MAX)
            .with_refresh_expiry_days(i64::MAX);

        assert_eq!(config.access_token_expiry, i64::MAX);
        assert_eq!(config.refresh_token_expiry, i64::MAX);
    }
}
