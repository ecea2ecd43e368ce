//! Declarative rule elements.
//!
//! A rule element is an immutable, data-only record describing one
//! conditional effect: a boolean flag or a flat numeric modifier. Rule
//! elements carry no behavior — the mechanics engine interprets them.
//! Stored lists are embedded on owning entities (items, conditions) and
//! live and die with their owner; ad-hoc lists (craftsmanship) are
//! synthesized fresh per resolution and never stored.

use serde::{Deserialize, Serialize};

use crate::error::CoreResult;

/// A single declarative effect, tagged by its `key` discriminant.
///
/// The kind set is closed but extensible: kinds this engine does not
/// recognize deserialize to [`RuleElement::Unknown`] rather than
/// failing, so forward-compatible content never hard-errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "key")]
pub enum RuleElement {
    /// Asserts a boolean flag token visible to later predicate
    /// evaluation. No numeric effect.
    RollOption {
        /// The flag token (e.g. `"weapon:craftsmanship:best"`).
        option: String,
        /// Human-readable label for display.
        label: String,
    },
    /// Contributes a flat value to every check declaring a matching
    /// domain.
    FlatModifier {
        /// The domain this modifier applies to (exact-match key).
        domain: String,
        /// Signed contribution to the check target.
        value: i32,
        /// Human-readable label for display.
        label: String,
        /// Provenance tag (e.g. `"equipment"`, `"condition"`).
        source: String,
    },
    /// A rule element kind this engine does not recognize. Skipped,
    /// with a log line, during synthesis.
    #[serde(other)]
    Unknown,
}

impl RuleElement {
    /// Build a roll option flag.
    pub fn roll_option(option: impl Into<String>, label: impl Into<String>) -> Self {
        Self::RollOption {
            option: option.into(),
            label: label.into(),
        }
    }

    /// Build a flat modifier.
    pub fn flat_modifier(
        domain: impl Into<String>,
        value: i32,
        label: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        Self::FlatModifier {
            domain: domain.into(),
            value,
            label: label.into(),
            source: source.into(),
        }
    }
}

/// Deserialize a rule element list from JSON.
///
/// Rule element data originates from loosely-structured declarative
/// sources; a list that parses but contains unknown kinds succeeds and
/// carries [`RuleElement::Unknown`] entries.
pub fn from_json(json: &str) -> CoreResult<Vec<RuleElement>> {
    Ok(serde_json::from_str(json)?)
}
