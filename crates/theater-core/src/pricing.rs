//! # Pricing Engine
//!
//! Maps a performance and its play to a charge and a volume credit.
//!
//! ## Rule Table
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  CHARGE (cents)                                                         │
//! │                                                                         │
//! │  tragedy:  40000                                                        │
//! │            + 1000 × (audience - 30)          if audience > 30           │
//! │                                                                         │
//! │  comedy:   30000                                                        │
//! │            + 10000 + 500 × (audience - 20)   if audience > 20           │
//! │            + 300 × audience                  always                     │
//! │                                                                         │
//! │  other:    UnknownPlayType(genre)                                       │
//! │                                                                         │
//! │  VOLUME CREDITS                                                         │
//! │                                                                         │
//! │  any genre: max(audience - 30, 0)                                       │
//! │  comedy:    + audience / 5                   (truncating)               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Only `charge` rejects unknown genres. `volume_credits` computes the base
//! term for every genre and never fails.
//!
//! ## Usage
//! ```rust
//! use theater_core::pricing::{charge, volume_credits};
//! use theater_core::{Genre, Performance, Play};
//!
//! let hamlet = Play::new("Hamlet", Genre::Tragedy);
//! let perf = Performance::new("hamlet", 55);
//!
//! assert_eq!(charge(&perf, &hamlet).unwrap().cents(), 65000);
//! assert_eq!(volume_credits(&perf, &hamlet), 25);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{Genre, Performance, Play};

// =============================================================================
// Reference Constants
// =============================================================================

pub const TRAGEDY_BASE_AMOUNT: Money = Money::from_cents(40_000);
pub const TRAGEDY_AUDIENCE_THRESHOLD: u32 = 30;
pub const TRAGEDY_OVER_BASE_CAPACITY_PER_PERSON: Money = Money::from_cents(1_000);

pub const COMEDY_BASE_AMOUNT: Money = Money::from_cents(30_000);
pub const COMEDY_AUDIENCE_THRESHOLD: u32 = 20;
pub const COMEDY_OVER_BASE_CAPACITY_AMOUNT: Money = Money::from_cents(10_000);
pub const COMEDY_OVER_BASE_CAPACITY_PER_PERSON: Money = Money::from_cents(500);
pub const COMEDY_AMOUNT_PER_AUDIENCE: Money = Money::from_cents(300);

pub const BASE_VOLUME_CREDIT_THRESHOLD: u32 = 30;
pub const COMEDY_EXTRA_VOLUME_FACTOR: u32 = 5;

// =============================================================================
// Rule Sets
// =============================================================================

/// Tragedy pricing: a base amount plus a per-person rate past the threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TragedyRules {
    pub base_amount: Money,
    pub audience_threshold: u32,
    pub over_capacity_per_person: Money,
}

impl TragedyRules {
    pub const STANDARD: TragedyRules = TragedyRules {
        base_amount: TRAGEDY_BASE_AMOUNT,
        audience_threshold: TRAGEDY_AUDIENCE_THRESHOLD,
        over_capacity_per_person: TRAGEDY_OVER_BASE_CAPACITY_PER_PERSON,
    };

    /// `None` when the charge overflows `Money`.
    pub fn charge(&self, audience: u32) -> Option<Money> {
        let mut amount = self.base_amount;
        if audience > self.audience_threshold {
            let over = self
                .over_capacity_per_person
                .checked_multiply_quantity(audience - self.audience_threshold)?;
            amount = amount.checked_add(over)?;
        }
        Some(amount)
    }
}

impl Default for TragedyRules {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Comedy pricing: tiered base plus a flat per-seat charge on every seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComedyRules {
    pub base_amount: Money,
    pub audience_threshold: u32,
    /// Fixed surcharge once the audience passes the threshold.
    pub over_capacity_amount: Money,
    pub over_capacity_per_person: Money,
    /// Charged for every seat, regardless of threshold.
    pub amount_per_audience: Money,
}

impl ComedyRules {
    pub const STANDARD: ComedyRules = ComedyRules {
        base_amount: COMEDY_BASE_AMOUNT,
        audience_threshold: COMEDY_AUDIENCE_THRESHOLD,
        over_capacity_amount: COMEDY_OVER_BASE_CAPACITY_AMOUNT,
        over_capacity_per_person: COMEDY_OVER_BASE_CAPACITY_PER_PERSON,
        amount_per_audience: COMEDY_AMOUNT_PER_AUDIENCE,
    };

    /// `None` when the charge overflows `Money`.
    pub fn charge(&self, audience: u32) -> Option<Money> {
        let mut amount = self.base_amount;
        if audience > self.audience_threshold {
            let over = self
                .over_capacity_per_person
                .checked_multiply_quantity(audience - self.audience_threshold)?;
            amount = amount
                .checked_add(self.over_capacity_amount)?
                .checked_add(over)?;
        }
        amount.checked_add(self.amount_per_audience.checked_multiply_quantity(audience)?)
    }
}

impl Default for ComedyRules {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Volume credit rules shared by all genres, with the comedy bonus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreditRules {
    pub base_threshold: u32,
    pub comedy_extra_factor: u32,
}

impl CreditRules {
    pub const STANDARD: CreditRules = CreditRules {
        base_threshold: BASE_VOLUME_CREDIT_THRESHOLD,
        comedy_extra_factor: COMEDY_EXTRA_VOLUME_FACTOR,
    };
}

impl Default for CreditRules {
    fn default() -> Self {
        Self::STANDARD
    }
}

// =============================================================================
// Pricing Rules
// =============================================================================

/// The full rule table: one rule set per genre plus the credit rules.
///
/// `Default` is the standard table. Custom tables come from configuration and
/// should pass `validation::validate_pricing_rules` before use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingRules {
    #[serde(default)]
    pub tragedy: TragedyRules,
    #[serde(default)]
    pub comedy: ComedyRules,
    #[serde(default)]
    pub credits: CreditRules,
}

/// Charge and credits for one performance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PerformancePrice {
    pub charge: Money,
    pub credits: u64,
}

impl PricingRules {
    pub const STANDARD: PricingRules = PricingRules {
        tragedy: TragedyRules::STANDARD,
        comedy: ComedyRules::STANDARD,
        credits: CreditRules::STANDARD,
    };

    /// Computes the charge for one performance of `play`.
    ///
    /// ## Errors
    /// - `UnknownPlayType` carrying the genre string when the play's genre has
    ///   no rule set
    /// - `ChargeOverflow` when the rule table's rates times the audience leave
    ///   the `Money` range
    pub fn charge(&self, performance: &Performance, play: &Play) -> CoreResult<Money> {
        let audience = performance.audience;
        let amount = match &play.genre {
            Genre::Tragedy => self.tragedy.charge(audience),
            Genre::Comedy => self.comedy.charge(audience),
            Genre::Other(genre) => return Err(CoreError::UnknownPlayType(genre.clone())),
        };
        amount.ok_or_else(|| CoreError::ChargeOverflow {
            genre: play.genre.to_string(),
            audience,
        })
    }

    /// Computes the volume credits for one performance of `play`.
    ///
    /// Accepts every genre, known or not. Both terms are bounded by the
    /// audience, so their sum always fits in a `u64`.
    pub fn volume_credits(&self, performance: &Performance, play: &Play) -> u64 {
        let audience = u64::from(performance.audience);
        let mut credits = audience.saturating_sub(u64::from(self.credits.base_threshold));

        if play.genre == Genre::Comedy {
            // A zero factor only reaches here from an unvalidated table
            let extra = audience
                .checked_div(u64::from(self.credits.comedy_extra_factor))
                .unwrap_or(0);
            credits += extra;
        }

        credits
    }

    /// Computes charge and credits together. Fails exactly when `charge` does.
    pub fn price(&self, performance: &Performance, play: &Play) -> CoreResult<PerformancePrice> {
        let charge = self.charge(performance, play)?;
        let credits = self.volume_credits(performance, play);
        Ok(PerformancePrice { charge, credits })
    }
}

// =============================================================================
// Standard-Rule Shortcuts
// =============================================================================

/// Charge under the standard rule table.
pub fn charge(performance: &Performance, play: &Play) -> CoreResult<Money> {
    PricingRules::STANDARD.charge(performance, play)
}

/// Volume credits under the standard rule table.
pub fn volume_credits(performance: &Performance, play: &Play) -> u64 {
    PricingRules::STANDARD.volume_credits(performance, play)
}

// =============================================================================
// Unit Tests
// =============================================================================
