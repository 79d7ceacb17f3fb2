//! Shared configuration for the token engine workspace
//!
//! This crate provides the configuration types used across the workspace:
//! - Authentication settings (signing secret, token lifetimes)
//! - Storage locations for the revocation and refresh-token tables
//! - Environment detection and logging settings

pub mod config;

// Re-export commonly used items at crate root
pub use config::{AppConfig, AuthConfig, Environment, LogFormat, LoggingConfig, StorageConfig};
