//! Configuration module with sub-modules per concern
//!
//! - `auth` - Signing secret and token lifetimes
//! - `environment` - Environment detection and logging configuration
//! - `storage` - Locations of the persisted token tables

pub mod auth;
pub mod environment;
pub mod storage;

use serde::{Deserialize, Serialize};

pub use auth::AuthConfig;
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use storage::StorageConfig;

/// Environment variable prefix for configuration overrides,
/// e.g. `TOKEN__AUTH__SECRET=...`
pub const ENV_PREFIX: &str = "TOKEN";

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    #[serde(default)]
    pub environment: Environment,

    /// Authentication configuration
    #[serde(default)]
    pub auth: AuthConfig,

    /// Storage configuration
    #[serde(default)]
    pub storage: StorageConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        let env = Environment::default();
        Self {
            environment: env,
            auth: AuthConfig::default(),
            storage: StorageConfig::default(),
            logging: LoggingConfig::for_environment(env),
        }
    }
}

impl AppConfig {
    /// Create configuration for a given environment with its defaults
    pub fn for_environment(environment: Environment) -> Self {
        Self {
            environment,
            logging: LoggingConfig::for_environment(environment),
            ..Default::default()
        }
    }

    /// Check the loaded values for settings the engine cannot run with
    pub fn validate(&self) -> Result<(), String> {
        if self.auth.secret.is_empty() {
            return Err("auth.secret must not be empty".to_string());
        }
        if self.auth.access_token_expiry <= 0 {
            return Err(format!(
                "auth.access_token_expiry must be positive, got {}",
                self.auth.access_token_expiry
            ));
        }
        if self.auth.refresh_token_expiry <= 0 {
            return Err(format!(
                "auth.refresh_token_expiry must be positive, got {}",
                self.auth.refresh_token_expiry
            ));
        }
        if self.environment.is_production() && self.auth.is_using_default_secret() {
            return Err("auth.secret must be changed in production".to_string());
        }
        Ok(())
    }
}

pub mod loader {
    //! Layered configuration loading: defaults, then an optional
    //! per-environment TOML file, then `TOKEN__`-prefixed variables.

    use super::{AppConfig, Environment, ENV_PREFIX};
    use config::{Config, File};
    use std::path::{Path, PathBuf};

    /// Load configuration, reading the `.env` file for the detected environment first
    pub fn load_config(path: Option<&Path>) -> Result<AppConfig, String> {
        let environment = Environment::from_env();
        // A missing .env file is not an error
        let _ = dotenvy::from_filename(environment.env_file()).or_else(|_| dotenvy::dotenv());
        // Re-detect in case the .env file set ENVIRONMENT
        let environment = Environment::from_env();

        let defaults = AppConfig::for_environment(environment);
        let defaults = Config::try_from(&defaults)
            .map_err(|e| format!("config defaults error: {e}"))?;

        let mut builder = Config::builder().add_source(defaults);
        let file = path
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(environment.config_file()));
        if file.exists() {
            builder = builder.add_source(File::from(file));
        }
        builder = builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .try_parsing(true)
                .separator("__"),
        );

        let merged: AppConfig = builder
            .build()
            .map_err(|e| format!("config build error: {e}"))?
            .try_deserialize()
            .map_err(|e| format!("config deserialize error: {e}"))?;
        merged.validate()?;
        Ok(merged)
    }
}
