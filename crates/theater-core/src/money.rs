//! # Money Module
//!
//! Provides the `Money` type for charges and totals, and the
//! `CurrencyFormatter` interface used when a statement is rendered.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  PRICING vs PRESENTATION                                                │
//! │                                                                         │
//! │  Pricing:      40000 + 1000 × 25 = 65000 cents   (integer, exact)       │
//! │                                                                         │
//! │  Presentation: 65000 cents ──► CurrencyFormatter ──► "$650.00"          │
//! │                                                                         │
//! │  No float ever enters a pricing decision. Formatting splits the cents   │
//! │  into major/minor parts with integer division, so display is exact too. │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use theater_core::money::{CurrencyFormatter, CurrencyStyle, Money};
//!
//! let charge = Money::from_cents(123_000);
//! assert_eq!(CurrencyStyle::en_us().format(charge), "$1,230.00");
//! assert_eq!(charge.to_string(), "$1,230.00");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of cents in one major currency unit.
pub const CENTS_PER_UNIT: i64 = 100;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: rule tables are validated non-negative, but the type
///   itself stays general so formatting of negative values is well defined
/// - **Single field tuple struct**: serializes as a bare integer, so config
///   files write `base_amount = 40000`
/// - **Checked arithmetic only**: overflow comes back as `None` and the
///   caller turns it into an error
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use theater_core::money::Money;
    ///
    /// let charge = Money::from_cents(65000); // Represents $650.00
    /// assert_eq!(charge.cents(), 65000);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion, truncated toward zero.
    ///
    /// ## Example
    /// ```rust
    /// use theater_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(1099).dollars(), 10);
    /// assert_eq!(Money::from_cents(-550).dollars(), -5);
    /// ```
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / CENTS_PER_UNIT
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % CENTS_PER_UNIT).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Adds two amounts, `None` on overflow.
    #[inline]
    pub const fn checked_add(self, other: Money) -> Option<Money> {
        match self.0.checked_add(other.0) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Multiplies a per-seat rate by a number of seats, `None` on overflow.
    ///
    /// ## Example
    /// ```rust
    /// use theater_core::money::Money;
    ///
    /// let per_seat = Money::from_cents(300);
    /// assert_eq!(per_seat.checked_multiply_quantity(35), Some(Money::from_cents(10500)));
    /// assert_eq!(Money::from_cents(i64::MAX).checked_multiply_quantity(2), None);
    /// ```
    #[inline]
    pub const fn checked_multiply_quantity(self, qty: u32) -> Option<Money> {
        match self.0.checked_mul(qty as i64) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display uses the en-US currency style, the same text a statement shows.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&CurrencyStyle::en_us().format(*self))
    }
}

// =============================================================================
// Currency Formatting
// =============================================================================

/// Renders a `Money` value for display.
///
/// The statement assembler only talks to this trait, so pricing and totals
/// can be tested without caring about locale details.
pub trait CurrencyFormatter {
    /// Formats an amount of cents as display text.
    fn format(&self, amount: Money) -> String;
}

/// Where the currency symbol goes relative to the number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SymbolPosition {
    /// `$1,230.00`
    #[default]
    Prefix,
    /// `1.230,00 €`
    Suffix,
}

/// A locale's currency display convention.
///
/// ## Example Config Section
/// ```toml
/// [currency]
/// symbol = "$"
/// grouping_separator = ","
/// decimal_separator = "."
/// symbol_position = "prefix"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyStyle {
    /// Currency symbol (e.g. "$").
    #[serde(default = "default_symbol")]
    pub symbol: String,

    /// Separator between groups of three integer digits.
    #[serde(default = "default_grouping_separator")]
    pub grouping_separator: String,

    /// Separator between major and minor units.
    #[serde(default = "default_decimal_separator")]
    pub decimal_separator: String,

    /// Placement of the symbol.
    #[serde(default)]
    pub symbol_position: SymbolPosition,
}

fn default_symbol() -> String {
    "$".to_string()
}

fn default_grouping_separator() -> String {
    ",".to_string()
}

fn default_decimal_separator() -> String {
    ".".to_string()
}

impl CurrencyStyle {
    /// US dollars, en-US conventions: `$1,230.00`, `-$5.50`.
    pub fn en_us() -> Self {
        CurrencyStyle {
            symbol: default_symbol(),
            grouping_separator: default_grouping_separator(),
            decimal_separator: default_decimal_separator(),
            symbol_position: SymbolPosition::Prefix,
        }
    }
}

impl Default for CurrencyStyle {
    fn default() -> Self {
        CurrencyStyle::en_us()
    }
}

impl CurrencyFormatter for CurrencyStyle {
    fn format(&self, amount: Money) -> String {
        let sign = if amount.is_negative() { "-" } else { "" };
        // unsigned_abs keeps i64::MIN representable
        let major = group_digits(amount.dollars().unsigned_abs(), &self.grouping_separator);
        let minor = amount.cents_part();

        match self.symbol_position {
            SymbolPosition::Prefix => format!(
                "{}{}{}{}{:02}",
                sign, self.symbol, major, self.decimal_separator, minor
            ),
            SymbolPosition::Suffix => format!(
                "{}{}{}{:02} {}",
                sign, major, self.decimal_separator, minor, self.symbol
            ),
        }
    }
}

/// Inserts `separator` between every group of three digits, from the right.
fn group_digits(value: u64, separator: &str) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 * separator.len());

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push_str(separator);
        }
        grouped.push(ch);
    }

    grouped
}

// =============================================================================
// Unit Tests
// =============================================================================
