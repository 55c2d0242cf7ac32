//! # theater-core: Pure Billing Logic for Theater Invoices
//!
//! Prices each performance on a customer's invoice, awards volume credits,
//! and renders the statement. Everything here is a pure function of its
//! inputs: no I/O, no shared mutable state.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Theater Billing Architecture                        │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │          Caller (loads plays + invoices, prints results)        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ Invoice, PlayCatalog                   │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ theater-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │  pricing  │  │ statement │  │   money   │  │   │
//! │  │   │  Invoice  │  │  charge   │  │ Assembler │  │   Money   │  │   │
//! │  │   │   Play    │  │  credits  │  │  Result   │  │ Formatter │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO GLOBAL STATE • PURE FUNCTIONS                     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                ▲                                        │
//! │  ┌─────────────────────────────┴───────────────────────────────────┐   │
//! │  │          theater-config (rule overrides, logging setup)         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Play, Genre, Performance, Invoice, PlayCatalog
//! - [`pricing`] - Charge and volume credit rules
//! - [`statement`] - Statement assembly and rendering
//! - [`money`] - Money type (integer cents) and currency formatting
//! - [`error`] - Domain error types
//! - [`validation`] - Rule table and catalog validation
//!
//! ## Example Usage
//!
//! ```rust
//! use theater_core::{statement, Genre, Invoice, Performance, Play, PlayCatalog};
//!
//! let mut plays = PlayCatalog::new();
//! plays.register("hamlet", Play::new("Hamlet", Genre::Tragedy)).unwrap();
//! plays.register("as-like", Play::new("As You Like It", Genre::Comedy)).unwrap();
//!
//! let invoice = Invoice::new(
//!     "BigCo",
//!     vec![Performance::new("hamlet", 55), Performance::new("as-like", 35)],
//! );
//!
//! let result = statement(&invoice, &plays).unwrap();
//! assert_eq!(result.total_amount.cents(), 123_000);
//! assert_eq!(result.total_credits, 37);
//! assert!(result.text.ends_with("Amount owed is $1,230.00\nYou earned 37 credits\n"));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod pricing;
pub mod statement;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::{CurrencyFormatter, CurrencyStyle, Money};
pub use pricing::{PerformancePrice, PricingRules};
pub use statement::{statement, StatementAssembler, StatementLine, StatementResult};
pub use types::*;
