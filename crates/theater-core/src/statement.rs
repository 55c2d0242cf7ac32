//! # Statement Assembler
//!
//! Prices every performance of an invoice and renders the statement text.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  for each performance (invoice order)                                   │
//! │       │                                                                 │
//! │       ├── catalog.resolve(play_id) ──────► UnknownPlay      (abort)     │
//! │       │                                                                 │
//! │       ├── rules.price(performance, play) ► UnknownPlayType  (abort)     │
//! │       │                                    ChargeOverflow   (abort)     │
//! │       │                                                                 │
//! │       ├── "  Hamlet: $650.00 (55 seats)"                                │
//! │       │                                                                 │
//! │       └── total_amount += charge, total_credits += credits              │
//! │                                                                         │
//! │  "Amount owed is $1,230.00"                                             │
//! │  "You earned 37 credits"                                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The first error aborts the statement; no partial text is returned.
//!
//! ## Usage
//! ```rust
//! use theater_core::{statement, Genre, Invoice, Performance, Play, PlayCatalog};
//!
//! let catalog: PlayCatalog = [("hamlet".to_string(), Play::new("Hamlet", Genre::Tragedy))]
//!     .into_iter()
//!     .collect();
//! let invoice = Invoice::new("BigCo", vec![Performance::new("hamlet", 55)]);
//!
//! let result = statement(&invoice, &catalog).unwrap();
//! assert_eq!(result.total_amount.cents(), 65000);
//! assert_eq!(result.total_credits, 25);
//! ```

use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{CoreError, CoreResult};
use crate::money::{CurrencyFormatter, CurrencyStyle, Money};
use crate::pricing::PricingRules;
use crate::types::{Invoice, PlayCatalog};

// =============================================================================
// Results
// =============================================================================

/// One priced performance, as shown on the statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatementLine {
    pub play_name: String,
    pub audience: u32,
    pub charge: Money,
    pub credits: u64,
}

/// The rendered statement plus the numbers behind it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatementResult {
    /// Full statement text, one `\n`-terminated line each.
    pub text: String,
    /// Sum of all charges.
    pub total_amount: Money,
    /// Sum of all volume credits.
    pub total_credits: u64,
    /// Per-performance breakdown in invoice order.
    pub lines: Vec<StatementLine>,
}

// =============================================================================
// Assembler
// =============================================================================

/// Builds statements against a rule table and a currency formatter.
pub struct StatementAssembler<'a, F: CurrencyFormatter + ?Sized = CurrencyStyle> {
    rules: &'a PricingRules,
    formatter: &'a F,
}

impl<'a, F: CurrencyFormatter + ?Sized> StatementAssembler<'a, F> {
    pub fn new(rules: &'a PricingRules, formatter: &'a F) -> Self {
        StatementAssembler { rules, formatter }
    }

    /// Prices `invoice` against `catalog` and renders the statement.
    ///
    /// ## Errors
    /// - `UnknownPlay` if a performance's play id is not in the catalog
    /// - `UnknownPlayType` if a resolved play has no pricing rule set
    /// - `ChargeOverflow` / `TotalOverflow` if an amount leaves the `Money` range
    pub fn assemble(&self, invoice: &Invoice, catalog: &PlayCatalog) -> CoreResult<StatementResult> {
        debug!(
            customer = %invoice.customer,
            performances = invoice.performances.len(),
            "Assembling statement"
        );

        let mut text = format!("Statement for {}\n", invoice.customer);
        let mut total_amount = Money::zero();
        let mut total_credits: u64 = 0;
        let mut lines = Vec::with_capacity(invoice.performances.len());

        for performance in &invoice.performances {
            let priced = catalog
                .resolve(&performance.play_id)
                .and_then(|play| {
                    self.rules
                        .price(performance, play)
                        .map(|price| (play, price))
                })
                .and_then(|(play, price)| {
                    total_amount
                        .checked_add(price.charge)
                        .map(|total| (play, price, total))
                        .ok_or_else(|| CoreError::TotalOverflow {
                            customer: invoice.customer.clone(),
                        })
                });

            let (play, price, total) = match priced {
                Ok(priced) => priced,
                Err(err) => {
                    warn!(
                        customer = %invoice.customer,
                        play_id = %performance.play_id,
                        error = %err,
                        "Statement aborted"
                    );
                    return Err(err);
                }
            };

            debug!(
                play_id = %performance.play_id,
                audience = performance.audience,
                charge = price.charge.cents(),
                credits = price.credits,
                "Priced performance"
            );

            text.push_str(&format!(
                "  {}: {} ({} seats)\n",
                play.name,
                self.formatter.format(price.charge),
                performance.audience
            ));

            total_amount = total;
            total_credits += price.credits;
            lines.push(StatementLine {
                play_name: play.name.clone(),
                audience: performance.audience,
                charge: price.charge,
                credits: price.credits,
            });
        }

        text.push_str(&format!(
            "Amount owed is {}\n",
            self.formatter.format(total_amount)
        ));
        text.push_str(&format!("You earned {} credits\n", total_credits));

        debug!(
            customer = %invoice.customer,
            total_amount = total_amount.cents(),
            total_credits,
            "Statement assembled"
        );

        Ok(StatementResult {
            text,
            total_amount,
            total_credits,
            lines,
        })
    }
}

/// Renders a statement with the standard rules and en-US currency display.
pub fn statement(invoice: &Invoice, catalog: &PlayCatalog) -> CoreResult<StatementResult> {
    let style = CurrencyStyle::en_us();
    StatementAssembler::new(&PricingRules::STANDARD, &style).assemble(invoice, catalog)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Genre, Performance, Play};
    use std::sync::Arc;

    fn catalog() -> PlayCatalog {
        let mut catalog = PlayCatalog::new();
        catalog
            .register("hamlet", Play::new("Hamlet", Genre::Tragedy))
            .unwrap();
        catalog
            .register("as-like", Play::new("As You Like It", Genre::Comedy))
            .unwrap();
        catalog
            .register("othello", Play::new("Othello", Genre::Tragedy))
            .unwrap();
        catalog
            .register("henry-v", Play::new("Henry V", "history"))
            .unwrap();
        catalog
    }

    fn big_co() -> Invoice {
        Invoice::new(
            "BigCo",
            vec![
                Performance::new("hamlet", 55),
                Performance::new("as-like", 35),
            ],
        )
    }

    #[test]
    fn test_statement_example() {
        let result = statement(&big_co(), &catalog()).unwrap();

        assert_eq!(
            result.text,
            "Statement for BigCo\n\
             \x20 Hamlet: $650.00 (55 seats)\n\
             \x20 As You Like It: $580.00 (35 seats)\n\
             Amount owed is $1,230.00\n\
             You earned 37 credits\n"
        );
        assert_eq!(result.total_amount.cents(), 123_000);
        assert_eq!(result.total_credits, 37);
    }

    #[test]
    fn test_statement_lines_follow_invoice_order() {
        let result = statement(&big_co(), &catalog()).unwrap();

        let names: Vec<&str> = result.lines.iter().map(|l| l.play_name.as_str()).collect();
        assert_eq!(names, ["Hamlet", "As You Like It"]);
        assert_eq!(result.lines[0].charge.cents(), 65_000);
        assert_eq!(result.lines[0].credits, 25);
        assert_eq!(result.lines[1].charge.cents(), 58_000);
        assert_eq!(result.lines[1].credits, 12);
    }

    #[test]
    fn test_reordering_changes_text_not_totals() {
        let mut reversed = big_co();
        reversed.performances.reverse();

        let forward = statement(&big_co(), &catalog()).unwrap();
        let backward = statement(&reversed, &catalog()).unwrap();

        assert_ne!(forward.text, backward.text);
        assert_eq!(forward.total_amount, backward.total_amount);
        assert_eq!(forward.total_credits, backward.total_credits);
    }

    #[test]
    fn test_empty_invoice() {
        let invoice = Invoice::new("Nobody", vec![]);
        let result = statement(&invoice, &catalog()).unwrap();

        assert_eq!(
            result.text,
            "Statement for Nobody\nAmount owed is $0.00\nYou earned 0 credits\n"
        );
        assert_eq!(result.total_amount, Money::zero());
        assert_eq!(result.total_credits, 0);
        assert!(result.lines.is_empty());
    }

    #[test]
    fn test_unknown_play_fails() {
        let invoice = Invoice::new(
            "BigCo",
            vec![
                Performance::new("hamlet", 55),
                Performance::new("macbeth", 40),
            ],
        );

        assert_eq!(
            statement(&invoice, &catalog()),
            Err(CoreError::UnknownPlay("macbeth".to_string()))
        );
    }

    #[test]
    fn test_unknown_play_type_fails() {
        let invoice = Invoice::new("BigCo", vec![Performance::new("henry-v", 40)]);

        assert_eq!(
            statement(&invoice, &catalog()),
            Err(CoreError::UnknownPlayType("history".to_string()))
        );
    }

    #[test]
    fn test_first_error_in_invoice_order_wins() {
        let missing_first = Invoice::new(
            "BigCo",
            vec![
                Performance::new("macbeth", 40),
                Performance::new("henry-v", 40),
            ],
        );
        assert!(matches!(
            statement(&missing_first, &catalog()),
            Err(CoreError::UnknownPlay(_))
        ));

        let history_first = Invoice::new(
            "BigCo",
            vec![
                Performance::new("henry-v", 40),
                Performance::new("macbeth", 40),
            ],
        );
        assert!(matches!(
            statement(&history_first, &catalog()),
            Err(CoreError::UnknownPlayType(_))
        ));
    }

    #[test]
    fn test_total_overflow_fails_statement() {
        let rules = PricingRules {
            tragedy: crate::pricing::TragedyRules {
                base_amount: Money::from_cents(i64::MAX / 2 + 1),
                ..crate::pricing::TragedyRules::STANDARD
            },
            ..PricingRules::default()
        };
        let style = CurrencyStyle::en_us();
        let assembler = StatementAssembler::new(&rules, &style);

        let single = Invoice::new("BigCo", vec![Performance::new("hamlet", 10)]);
        assert!(assembler.assemble(&single, &catalog()).is_ok());

        let double = Invoice::new(
            "BigCo",
            vec![
                Performance::new("hamlet", 10),
                Performance::new("othello", 10),
            ],
        );
        assert_eq!(
            assembler.assemble(&double, &catalog()),
            Err(CoreError::TotalOverflow {
                customer: "BigCo".to_string(),
            })
        );
    }

    #[test]
    fn test_charge_overflow_fails_statement() {
        let rules = PricingRules {
            tragedy: crate::pricing::TragedyRules {
                over_capacity_per_person: Money::from_cents(i64::MAX / 1000),
                ..crate::pricing::TragedyRules::STANDARD
            },
            ..PricingRules::default()
        };
        let style = CurrencyStyle::en_us();
        let invoice = Invoice::new("BigCo", vec![Performance::new("othello", 10_000)]);

        assert!(matches!(
            StatementAssembler::new(&rules, &style).assemble(&invoice, &catalog()),
            Err(CoreError::ChargeOverflow { audience: 10_000, .. })
        ));
    }

    #[test]
    fn test_huge_comedy_audience_credits_are_exact() {
        let invoice = Invoice::new("BigCo", vec![Performance::new("as-like", u32::MAX)]);
        let result = statement(&invoice, &catalog()).unwrap();

        assert_eq!(result.lines[0].credits, 5_153_960_724);
        assert_eq!(result.total_credits, 5_153_960_724);
        assert!(result.text.ends_with("You earned 5153960724 credits\n"));
    }

    #[test]
    fn test_custom_formatter_and_rules() {
        struct PlainCents;

        impl CurrencyFormatter for PlainCents {
            fn format(&self, amount: Money) -> String {
                format!("{}c", amount.cents())
            }
        }

        let mut rules = PricingRules::default();
        rules.credits.base_threshold = 50;

        let result = StatementAssembler::new(&rules, &PlainCents)
            .assemble(&big_co(), &catalog())
            .unwrap();

        assert_eq!(
            result.text,
            "Statement for BigCo\n\
             \x20 Hamlet: 65000c (55 seats)\n\
             \x20 As You Like It: 58000c (35 seats)\n\
             Amount owed is 123000c\n\
             You earned 12 credits\n"
        );
    }

    #[test]
    fn test_dyn_formatter() {
        let style = CurrencyStyle::en_us();
        let formatter: &dyn CurrencyFormatter = &style;

        let result = StatementAssembler::new(&PricingRules::STANDARD, formatter)
            .assemble(&big_co(), &catalog())
            .unwrap();
        assert_eq!(result, statement(&big_co(), &catalog()).unwrap());
    }

    #[test]
    fn test_inputs_are_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Invoice>();
        assert_send_sync::<PlayCatalog>();
        assert_send_sync::<PricingRules>();
        assert_send_sync::<CurrencyStyle>();
        assert_send_sync::<StatementResult>();
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_statements_share_one_catalog() {
        let catalog = Arc::new(catalog());
        let mut handles = Vec::new();

        for i in 0..16u32 {
            let catalog = Arc::clone(&catalog);
            handles.push(tokio::spawn(async move {
                let invoice = Invoice::new(
                    format!("Customer {}", i),
                    vec![
                        Performance::new("othello", 30 + i),
                        Performance::new("as-like", 20 + i),
                    ],
                );
                statement(&invoice, &catalog)
            }));
        }

        for (i, handle) in handles.into_iter().enumerate() {
            let result = handle.await.unwrap().unwrap();
            let i = i as i64;
            let expected = (40_000 + 1_000 * i) + (30_000 + 300 * (20 + i));
            let expected = if i > 0 {
                expected + 10_000 + 500 * i
            } else {
                expected
            };
            assert_eq!(result.total_amount.cents(), expected);
        }
    }
}
