//! # theater-config: Configuration & Logging
//!
//! Loads optional overrides for the billing core and installs the `tracing`
//! subscriber for whatever host embeds it.
//!
//! ## Modules
//!
//! - [`config`] - `BillingConfig` loading (defaults → TOML → environment)
//! - [`logging`] - `init_tracing` and the `[logging]` section
//! - [`error`] - `ConfigError`
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use theater_config::{init_tracing, BillingConfig};
//! use theater_core::{Invoice, PlayCatalog};
//!
//! let config = BillingConfig::load_or_default(None);
//! init_tracing(&config.logging).ok();
//!
//! let result = config
//!     .statement(&Invoice::new("BigCo", vec![]), &PlayCatalog::new())
//!     .unwrap();
//! print!("{}", result.text);
//! ```

pub mod config;
pub mod error;
pub mod logging;

pub use config::BillingConfig;
pub use error::{ConfigError, ConfigResult};
pub use logging::{init_tracing, LoggingSettings};
