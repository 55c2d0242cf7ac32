//! # Domain Types
//!
//! The already-parsed values a collaborator hands to the core.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Invoice      │   │  Performance    │   │   PlayCatalog   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  customer       │──►│  play_id ───────┼──►│  id ──► Play    │       │
//! │  │  performances   │   │  audience       │   │                 │       │
//! │  └─────────────────┘   └─────────────────┘   └────────┬────────┘       │
//! │                                                       │                 │
//! │                                              ┌────────▼────────┐       │
//! │                                              │      Play       │       │
//! │                                              │  name           │       │
//! │                                              │  genre (Genre)  │       │
//! │                                              └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A performance refers to its play by id only. The catalog owns the plays.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::validation::{validate_play_id, validate_play_name};

// =============================================================================
// Genre
// =============================================================================

/// Classification of a play that selects a pricing rule set.
///
/// Known genres are matched exactly (`"tragedy"`, `"comedy"`). Anything else
/// is kept verbatim in `Other` so the pricing engine can report it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Genre {
    Tragedy,
    Comedy,
    /// A genre with no pricing rules.
    Other(String),
}

impl Genre {
    /// Returns the genre as it appears in play data.
    pub fn as_str(&self) -> &str {
        match self {
            Genre::Tragedy => "tragedy",
            Genre::Comedy => "comedy",
            Genre::Other(name) => name,
        }
    }

    /// Returns true for genres with a pricing rule set.
    pub fn is_known(&self) -> bool {
        !matches!(self, Genre::Other(_))
    }
}

impl From<&str> for Genre {
    fn from(s: &str) -> Self {
        match s {
            "tragedy" => Genre::Tragedy,
            "comedy" => Genre::Comedy,
            other => Genre::Other(other.to_string()),
        }
    }
}

impl From<String> for Genre {
    fn from(s: String) -> Self {
        match s.as_str() {
            "tragedy" => Genre::Tragedy,
            "comedy" => Genre::Comedy,
            _ => Genre::Other(s),
        }
    }
}

impl From<Genre> for String {
    fn from(genre: Genre) -> Self {
        match genre {
            Genre::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Play
// =============================================================================

/// A play in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Play {
    /// Display name shown on the statement line.
    pub name: String,

    /// Genre, stored under `type` in play data.
    #[serde(rename = "type")]
    pub genre: Genre,
}

impl Play {
    pub fn new(name: impl Into<String>, genre: impl Into<Genre>) -> Self {
        Play {
            name: name.into(),
            genre: genre.into(),
        }
    }
}

// =============================================================================
// Performance
// =============================================================================

/// One invoice line: a play id and the seats sold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Performance {
    /// Lookup key into the `PlayCatalog`.
    #[serde(rename = "playID", alias = "play_id")]
    pub play_id: String,

    /// Seats sold.
    pub audience: u32,
}

impl Performance {
    pub fn new(play_id: impl Into<String>, audience: u32) -> Self {
        Performance {
            play_id: play_id.into(),
            audience,
        }
    }
}

// =============================================================================
// Invoice
// =============================================================================

/// A customer's invoice. Performance order is statement line order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    pub customer: String,
    #[serde(default)]
    pub performances: Vec<Performance>,
}

impl Invoice {
    pub fn new(customer: impl Into<String>, performances: Vec<Performance>) -> Self {
        Invoice {
            customer: customer.into(),
            performances,
        }
    }
}

// =============================================================================
// Play Catalog
// =============================================================================

/// Plays keyed by id.
///
/// Read-only during statement generation; safe to share across threads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayCatalog {
    plays: HashMap<String, Play>,
}

impl PlayCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a play under `id`.
    ///
    /// ## Errors
    /// - `Validation(Required | TooLong)` if the id or name is unusable
    /// - `Validation(Duplicate)` if `id` is already registered
    pub fn register(&mut self, id: impl Into<String>, play: Play) -> CoreResult<()> {
        let id = id.into();
        validate_play_id(&id)?;
        validate_play_name(&play.name)?;

        if self.plays.contains_key(&id) {
            return Err(ValidationError::Duplicate {
                field: "play id".to_string(),
                value: id,
            }
            .into());
        }

        self.plays.insert(id, play);
        Ok(())
    }

    /// Looks up a play by id.
    #[inline]
    pub fn get(&self, id: &str) -> Option<&Play> {
        self.plays.get(id)
    }

    /// Looks up a play by id, failing with `UnknownPlay` if it is absent.
    pub fn resolve(&self, id: &str) -> CoreResult<&Play> {
        self.get(id)
            .ok_or_else(|| CoreError::UnknownPlay(id.to_string()))
    }
}

impl FromIterator<(String, Play)> for PlayCatalog {
    fn from_iter<I: IntoIterator<Item = (String, Play)>>(iter: I) -> Self {
        PlayCatalog {
            plays: iter.into_iter().collect(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_genre_parsing() {
        assert_eq!(Genre::from("tragedy"), Genre::Tragedy);
        assert_eq!(Genre::from("comedy"), Genre::Comedy);
        assert_eq!(
            Genre::from("pastoral"),
            Genre::Other("pastoral".to_string())
        );
        // Matching is exact, as in the play data
        assert_eq!(Genre::from("Comedy"), Genre::Other("Comedy".to_string()));
    }

    #[test]
    fn test_genre_round_trips_through_string() {
        for raw in ["tragedy", "comedy", "history"] {
            let genre = Genre::from(raw);
            assert_eq!(String::from(genre.clone()), raw);
            assert_eq!(genre.to_string(), raw);
        }
        assert!(Genre::Tragedy.is_known());
        assert!(!Genre::from("history").is_known());
    }

    #[test]
    fn test_play_deserializes_type_field() {
        let play: Play =
            serde_json::from_str(r#"{"name": "Hamlet", "type": "tragedy"}"#).unwrap();
        assert_eq!(play, Play::new("Hamlet", Genre::Tragedy));

        let play: Play =
            serde_json::from_str(r#"{"name": "Henry V", "type": "history"}"#).unwrap();
        assert_eq!(play.genre, Genre::Other("history".to_string()));
    }

    #[test]
    fn test_invoice_deserializes() {
        let invoice: Invoice = serde_json::from_str(
            r#"{
                "customer": "BigCo",
                "performances": [
                    {"playID": "hamlet", "audience": 55},
                    {"play_id": "as-like", "audience": 35}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(invoice.customer, "BigCo");
        assert_eq!(invoice.performances[0], Performance::new("hamlet", 55));
        assert_eq!(invoice.performances[1], Performance::new("as-like", 35));
    }

    #[test]
    fn test_negative_audience_is_rejected_by_the_type() {
        let result: Result<Performance, _> =
            serde_json::from_str(r#"{"playID": "hamlet", "audience": -1}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_catalog_register_and_resolve() {
        let mut catalog = PlayCatalog::new();
        catalog
            .register("hamlet", Play::new("Hamlet", Genre::Tragedy))
            .unwrap();

        assert_eq!(catalog.resolve("hamlet").unwrap().name, "Hamlet");
        assert_eq!(
            catalog.resolve("othello"),
            Err(CoreError::UnknownPlay("othello".to_string()))
        );
    }

    #[test]
    fn test_catalog_rejects_duplicates_and_blank_ids() {
        let mut catalog = PlayCatalog::new();
        catalog
            .register("hamlet", Play::new("Hamlet", Genre::Tragedy))
            .unwrap();

        let err = catalog
            .register("hamlet", Play::new("Hamlet (revival)", Genre::Tragedy))
            .unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::Duplicate { .. })
        ));

        let err = catalog
            .register("  ", Play::new("Nameless", Genre::Comedy))
            .unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::Required { .. })
        ));
        assert!(catalog.get("  ").is_none());
        assert_eq!(catalog.get("hamlet").unwrap().name, "Hamlet");
    }

    #[test]
    fn test_catalog_deserializes_as_map() {
        let catalog: PlayCatalog = serde_json::from_str(
            r#"{
                "hamlet": {"name": "Hamlet", "type": "tragedy"},
                "as-like": {"name": "As You Like It", "type": "comedy"}
            }"#,
        )
        .unwrap();

        assert_eq!(catalog.get("hamlet").unwrap().genre, Genre::Tragedy);
        assert_eq!(catalog.get("as-like").unwrap().genre, Genre::Comedy);
    }
}
