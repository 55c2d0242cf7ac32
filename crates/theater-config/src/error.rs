//! # Config Error Types
//!
//! ## Error Categories
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Config Error Categories                           │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │    Loading      │  │   Validation    │  │       Logging           │ │
//! │  │                 │  │                 │  │                         │ │
//! │  │  ConfigLoad     │  │  InvalidConfig  │  │  LoggingInit            │ │
//! │  │  Failed         │  │  Validation     │  │                         │ │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use theater_core::ValidationError;
use thiserror::Error;

/// Result type alias for config operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Failures while loading configuration or installing logging.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read or parsed.
    #[error("Failed to load config: {0}")]
    ConfigLoadFailed(String),

    /// A setting has an unusable value.
    #[error("Invalid billing configuration: {0}")]
    InvalidConfig(String),

    /// The pricing rule overrides failed validation.
    #[error("Invalid pricing rules: {0}")]
    Validation(#[from] ValidationError),

    /// The tracing subscriber could not be installed.
    #[error("Failed to initialize logging: {0}")]
    LoggingInit(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::ConfigLoadFailed(err.to_string())
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::ConfigLoadFailed(err.to_string())
    }
}
