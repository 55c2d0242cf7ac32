//! # Billing Configuration
//!
//! Optional overrides for the pricing rule table, the currency display style
//! and logging.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     THEATER_TRAGEDY_BASE_AMOUNT=45000                                  │
//! │     THEATER_LOG_FILTER=debug                                           │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/theater-billing/theater-billing.toml (Linux)             │
//! │     ~/Library/Application Support/com.theater.billing/... (macOS)      │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     Standard rule table, en-US currency, "info,theater=debug"          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [pricing.tragedy]
//! base_amount = 40000
//! audience_threshold = 30
//! over_capacity_per_person = 1000
//!
//! [pricing.comedy]
//! amount_per_audience = 300
//!
//! [pricing.credits]
//! base_threshold = 30
//! comedy_extra_factor = 5
//!
//! [currency]
//! symbol = "$"
//!
//! [logging]
//! filter = "info,theater=debug"
//! ```
//!
//! Every section and key is optional; missing keys keep the standard values.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use theater_core::validation::validate_pricing_rules;
use theater_core::{
    CoreResult, CurrencyStyle, Invoice, Money, PlayCatalog, PricingRules, StatementAssembler,
    StatementResult,
};
use tracing::{debug, info, warn};

use crate::error::{ConfigError, ConfigResult};
use crate::logging::LoggingSettings;

/// File name looked up in the platform config directory.
pub const CONFIG_FILE_NAME: &str = "theater-billing.toml";

// =============================================================================
// Main Billing Configuration
// =============================================================================

/// Complete billing configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingConfig {
    /// Rule table overrides.
    #[serde(default)]
    pub pricing: PricingRules,

    /// Currency display style.
    #[serde(default)]
    pub currency: CurrencyStyle,

    /// Log filter settings.
    #[serde(default)]
    pub logging: LoggingSettings,
}

impl BillingConfig {
    /// Creates a config with the standard rules and en-US display.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a TOML document. Does not validate or read the environment.
    pub fn from_toml_str(contents: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (`theater-billing.toml`)
    /// 3. Environment variables
    ///
    /// An explicit `config_path` must exist. A missing file at the default
    /// location just means defaults.
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::ConfigLoadFailed(format!(
                    "config file not found: {}",
                    path.display()
                )));
            }
            config = Self::read_file(&path)?;
        } else if let Some(path) = Self::default_config_path() {
            if path.exists() {
                config = Self::read_file(&path)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    fn read_file(path: &Path) -> ConfigResult<Self> {
        info!(?path, "Loading billing config from file");
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load billing config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        validate_pricing_rules(&self.pricing)?;

        if self.currency.decimal_separator.is_empty() {
            return Err(ConfigError::InvalidConfig(
                "currency decimal_separator must not be empty".into(),
            ));
        }

        if self.currency.decimal_separator == self.currency.grouping_separator {
            return Err(ConfigError::InvalidConfig(format!(
                "currency decimal and grouping separators are both '{}'",
                self.currency.decimal_separator
            )));
        }

        self.logging.env_filter()?;

        Ok(())
    }

    /// Applies overrides from the process environment.
    fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|key| std::env::var(key).ok());
    }

    /// Applies overrides from any key lookup.
    fn apply_overrides_from(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(symbol) = lookup("THEATER_CURRENCY_SYMBOL") {
            debug!(symbol = %symbol, "Overriding currency symbol from environment");
            self.currency.symbol = symbol;
        }

        if let Some(filter) = lookup("THEATER_LOG_FILTER") {
            self.logging.filter = filter;
        }

        if let Some(amount) = lookup("THEATER_TRAGEDY_BASE_AMOUNT") {
            match amount.parse::<i64>() {
                Ok(cents) => {
                    debug!(cents, "Overriding tragedy base amount from environment");
                    self.pricing.tragedy.base_amount = Money::from_cents(cents);
                }
                Err(_) => warn!(value = %amount, "Ignoring non-numeric THEATER_TRAGEDY_BASE_AMOUNT"),
            }
        }

        if let Some(amount) = lookup("THEATER_COMEDY_BASE_AMOUNT") {
            match amount.parse::<i64>() {
                Ok(cents) => {
                    debug!(cents, "Overriding comedy base amount from environment");
                    self.pricing.comedy.base_amount = Money::from_cents(cents);
                }
                Err(_) => warn!(value = %amount, "Ignoring non-numeric THEATER_COMEDY_BASE_AMOUNT"),
            }
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "theater", "billing")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    // =========================================================================
    // Convenience Methods
    // =========================================================================

    /// Returns an assembler bound to this config's rules and currency style.
    pub fn assembler(&self) -> StatementAssembler<'_> {
        StatementAssembler::new(&self.pricing, &self.currency)
    }

    /// Renders a statement with this config's rules and currency style.
    pub fn statement(&self, invoice: &Invoice, catalog: &PlayCatalog) -> CoreResult<StatementResult> {
        self.assembler().assemble(invoice, catalog)
    }
}
