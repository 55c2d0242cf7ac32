//! # Logging Setup
//!
//! Installs the global `tracing` subscriber for a host embedding the billing
//! core. The core only emits events; it never installs anything itself.
//!
//! ## Filter Resolution
//! ```text
//! RUST_LOG set and valid? ──yes──► use RUST_LOG
//!        │
//!        no
//!        ▼
//! [logging].filter from config (default "info,theater=debug")
//! ```

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use crate::error::{ConfigError, ConfigResult};

/// `[logging]` section of the billing config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// `EnvFilter` directive string used when `RUST_LOG` is not set.
    #[serde(default = "default_filter")]
    pub filter: String,
}

fn default_filter() -> String {
    "info,theater=debug".to_string()
}

impl Default for LoggingSettings {
    fn default() -> Self {
        LoggingSettings {
            filter: default_filter(),
        }
    }
}

impl LoggingSettings {
    /// Parses the configured directive string.
    pub fn env_filter(&self) -> ConfigResult<EnvFilter> {
        EnvFilter::try_new(&self.filter).map_err(|e| {
            ConfigError::InvalidConfig(format!("bad log filter '{}': {}", self.filter, e))
        })
    }
}

/// Installs a fmt subscriber with the resolved filter.
///
/// ## Errors
/// - `InvalidConfig` if `RUST_LOG` is unset and the configured filter is bad
/// - `LoggingInit` if a global subscriber is already installed
pub fn init_tracing(settings: &LoggingSettings) -> ConfigResult<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => settings.env_filter()?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| ConfigError::LoggingInit(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_parses() {
        let settings = LoggingSettings::default();
        assert_eq!(settings.filter, "info,theater=debug");
        assert!(settings.env_filter().is_ok());
    }

    #[test]
    fn test_bad_filter_is_rejected() {
        let settings = LoggingSettings {
            filter: "theater=notalevel".to_string(),
        };
        assert!(matches!(
            settings.env_filter(),
            Err(ConfigError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_second_init_fails() {
        let settings = LoggingSettings::default();
        // Only this test installs a subscriber in this binary
        assert!(init_tracing(&settings).is_ok());
        assert!(matches!(
            init_tracing(&settings),
            Err(ConfigError::LoggingInit(_))
        ));
    }
}
