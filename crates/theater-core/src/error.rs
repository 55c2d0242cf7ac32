//! # Error Types
//!
//! Domain-specific error types for theater-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  theater-core errors (this file)                                       │
//! │  ├── CoreError        - Statement and pricing failures                 │
//! │  └── ValidationError  - Rule table / catalog input failures            │
//! │                                                                         │
//! │  theater-config errors (separate crate)                                │
//! │  └── ConfigError      - Config file, env and logging setup failures    │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError / ConfigError → caller              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (play id, genre, field)
//! 3. Errors are enum variants, never String
//! 4. No recovery inside the core: every error aborts the statement

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Pricing and statement errors.
///
/// Every variant is unrecoverable for the statement being generated:
/// the caller gets the error and no partial text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A performance references a play id that is missing from the catalog.
    ///
    /// Raised by the statement assembler before any pricing is attempted
    /// for that performance.
    #[error("Play not found: {0}")]
    UnknownPlay(String),

    /// A resolved play has a genre with no pricing rule set.
    ///
    /// ## When This Occurs
    /// Only the charge calculation raises this. Volume credits for the same
    /// play are still computed from the base term.
    /// ```text
    /// Play { genre: "pastoral" }
    ///      │
    ///      ├── volume_credits() ──► base term, no error
    ///      │
    ///      └── charge() ──────────► UnknownPlayType("pastoral")
    /// ```
    #[error("Unknown play type: {0}")]
    UnknownPlayType(String),

    /// A charge does not fit in `Money` under the active rule table.
    ///
    /// Only reachable with custom rates large enough that rate × audience
    /// exceeds the i64 cent range.
    #[error("Charge overflow for {genre} performance with audience {audience}")]
    ChargeOverflow { genre: String, audience: u32 },

    /// The running statement total does not fit in `Money`.
    #[error("Statement total overflow for customer {customer}")]
    TotalOverflow { customer: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised when a rule table or catalog entry doesn't meet requirements.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Duplicate value (e.g., play id registered twice).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
