//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid port number")]
    InvalidPort,

    #[error("Sender address must contain '@'")]
    InvalidSenderAddress,

    #[error("Fallback contact address must contain '@'")]
    InvalidFallbackAddress,

    #[error("Unknown department key in contact overrides: {0}")]
    UnknownDepartmentKey(String),

    #[error("Contact address for '{0}' must contain '@'")]
    InvalidContactAddress(String),
}
