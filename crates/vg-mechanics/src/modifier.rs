//! Runtime modifiers synthesized for a single resolution.

use serde::{Deserialize, Serialize};

/// A numeric modifier in effect for one check.
///
/// Synthesized from a matching flat-modifier rule element; it carries
/// no lifecycle beyond the resolution it was produced for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifier {
    /// Display label carried from the rule element.
    pub label: String,
    /// Signed contribution to the effective target.
    pub value: i32,
    /// Provenance tag (e.g. `"equipment"`, `"craftsmanship"`).
    pub source: String,
}

impl std::fmt::Display for Modifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.value >= 0 {
            write!(f, "+{} {} ({})", self.value, self.label, self.source)
        } else {
            write!(f, "{} {} ({})", self.value, self.label, self.source)
        }
    }
}

/// A boolean flag asserted by a roll-option rule element.
///
/// Flags never contribute to the numeric total but are preserved for
/// downstream predicate evaluation and display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollOptionFlag {
    /// The flag token.
    pub option: String,
    /// Display label carried from the rule element.
    pub label: String,
}

/// Everything the synthesizer produced for one resolution.
///
/// Both sequences preserve source-scan order (equipment, then
/// conditions, then ad-hoc) — that order is an observable contract
/// because it determines display order in the result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModifierSet {
    /// Numeric modifiers, in emission order.
    pub modifiers: Vec<Modifier>,
    /// Asserted flags, in emission order.
    pub options: Vec<RollOptionFlag>,
}

impl ModifierSet {
    /// The net modifier: the sum of all numeric modifier values.
    pub fn total(&self) -> i32 {
        self.modifiers.iter().map(|m| m.value).sum()
    }

    /// True if the given flag token was asserted.
    pub fn has_option(&self, option: &str) -> bool {
        self.options.iter().any(|o| o.option == option)
    }

    /// True if nothing was synthesized.
    pub fn is_empty(&self) -> bool {
        self.modifiers.is_empty() && self.options.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn modifier(label: &str, value: i32, source: &str) -> Modifier {
        Modifier {
            label: label.to_string(),
            value,
            source: source.to_string(),
        }
    }

    #[test]
    fn total_sums_all_values() {
        let set = ModifierSet {
            modifiers: vec![
                modifier("Best Craftsmanship", 10, "craftsmanship"),
                modifier("Darkness", -20, "condition"),
            ],
            options: Vec::new(),
        };
        assert_eq!(set.total(), -10);
    }

    #[test]
    fn options_never_affect_total() {
        let set = ModifierSet {
            modifiers: Vec::new(),
            options: vec![RollOptionFlag {
                option: "weapon:craftsmanship:best".to_string(),
                label: "Best Craftsmanship".to_string(),
            }],
        };
        assert_eq!(set.total(), 0);
        assert!(set.has_option("weapon:craftsmanship:best"));
        assert!(!set.has_option("other"));
    }

    #[test]
    fn empty_set() {
        let set = ModifierSet::default();
        assert!(set.is_empty());
        assert_eq!(set.total(), 0);
    }

    #[test]
    fn modifier_display() {
        assert_eq!(
            modifier("Jaded", 10, "talent").to_string(),
            "+10 Jaded (talent)"
        );
        assert_eq!(
            modifier("Cumbersome", -10, "equipment").to_string(),
            "-10 Cumbersome (equipment)"
        );
    }
}
