//! # Validation Module
//!
//! Input validation for rule tables and catalog entries.
//!
//! ## Where Validation Runs
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Points                                  │
//! │                                                                         │
//! │  theater-config: BillingConfig::validate()                             │
//! │  └── validate_pricing_rules() before a custom table is used            │
//! │                                                                         │
//! │  PlayCatalog::register()                                               │
//! │  ├── validate_play_id()                                                │
//! │  └── validate_play_name()                                              │
//! │                                                                         │
//! │  The statement assembler itself never validates: it prices what it is  │
//! │  given and only fails on UnknownPlay / UnknownPlayType.                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::pricing::PricingRules;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest accepted play id.
pub const MAX_PLAY_ID_LEN: usize = 64;

/// Longest accepted play name.
pub const MAX_PLAY_NAME_LEN: usize = 200;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a play identifier.
///
/// ## Rules
/// - Must not be empty or whitespace
/// - At most 64 characters
///
/// ## Example
/// ```rust
/// use theater_core::validation::validate_play_id;
///
/// assert!(validate_play_id("hamlet").is_ok());
/// assert!(validate_play_id("").is_err());
/// ```
pub fn validate_play_id(id: &str) -> ValidationResult<()> {
    let id = id.trim();

    if id.is_empty() {
        return Err(ValidationError::Required {
            field: "play id".to_string(),
        });
    }

    if id.chars().count() > MAX_PLAY_ID_LEN {
        return Err(ValidationError::TooLong {
            field: "play id".to_string(),
            max: MAX_PLAY_ID_LEN,
        });
    }

    Ok(())
}

/// Validates a play display name.
pub fn validate_play_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "play name".to_string(),
        });
    }

    if name.chars().count() > MAX_PLAY_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "play name".to_string(),
            max: MAX_PLAY_NAME_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a rule amount in cents.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (a free tier)
pub fn validate_amount(field: &str, amount: Money) -> ValidationResult<()> {
    if amount.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a full rule table.
///
/// ## Rules
/// - Every amount and per-person rate is non-negative, which keeps charges
///   non-negative and non-decreasing in audience
/// - The comedy extra volume factor is positive (it is a divisor)
///
/// ## Example
/// ```rust
/// use theater_core::pricing::PricingRules;
/// use theater_core::validation::validate_pricing_rules;
///
/// assert!(validate_pricing_rules(&PricingRules::default()).is_ok());
///
/// let mut rules = PricingRules::default();
/// rules.credits.comedy_extra_factor = 0;
/// assert!(validate_pricing_rules(&rules).is_err());
/// ```
pub fn validate_pricing_rules(rules: &PricingRules) -> ValidationResult<()> {
    let amounts = [
        ("tragedy base amount", rules.tragedy.base_amount),
        (
            "tragedy over capacity per person",
            rules.tragedy.over_capacity_per_person,
        ),
        ("comedy base amount", rules.comedy.base_amount),
        ("comedy over capacity amount", rules.comedy.over_capacity_amount),
        (
            "comedy over capacity per person",
            rules.comedy.over_capacity_per_person,
        ),
        ("comedy amount per audience", rules.comedy.amount_per_audience),
    ];

    for (field, amount) in amounts {
        validate_amount(field, amount)?;
    }

    if rules.credits.comedy_extra_factor == 0 {
        return Err(ValidationError::MustBePositive {
            field: "comedy extra volume factor".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_play_id() {
        assert!(validate_play_id("hamlet").is_ok());
        assert!(validate_play_id("as-like").is_ok());

        assert!(validate_play_id("").is_err());
        assert!(validate_play_id("   ").is_err());
        assert!(validate_play_id(&"a".repeat(65)).is_err());
    }

    #[test]
    fn test_validate_play_name() {
        assert!(validate_play_name("As You Like It").is_ok());
        assert!(validate_play_name("").is_err());
        assert!(validate_play_name(&"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_amount() {
        assert!(validate_amount("base", Money::zero()).is_ok());
        assert!(validate_amount("base", Money::from_cents(40_000)).is_ok());
        assert!(validate_amount("base", Money::from_cents(-1)).is_err());
    }

    #[test]
    fn test_validate_pricing_rules_rejects_negative_rate() {
        let mut rules = PricingRules::default();
        rules.comedy.over_capacity_per_person = Money::from_cents(-500);

        let err = validate_pricing_rules(&rules).unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("comedy over capacity per person must be between 0 and {}", i64::MAX)
        );
    }

    #[test]
    fn test_validate_pricing_rules_rejects_zero_factor() {
        let mut rules = PricingRules::default();
        rules.credits.comedy_extra_factor = 0;

        assert_eq!(
            validate_pricing_rules(&rules),
            Err(ValidationError::MustBePositive {
                field: "comedy extra volume factor".to_string()
            })
        );
    }
}
