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
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Invalid Redis URL format")]
    InvalidRedisUrl,

    #[error("Session cookie name must be a non-empty token")]
    InvalidCookieName,

    #[error("Session max age must be between 1 and 365 days")]
    InvalidSessionMaxAge,

    #[error("Session secret must be changed from the default in production")]
    DefaultSessionSecret,

    #[error("Session secret must be at least {0} bytes in production")]
    SessionSecretTooShort(usize),
}
