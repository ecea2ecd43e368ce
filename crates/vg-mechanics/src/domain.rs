//! The domain taxonomy: string keys addressing what kind of test a
//! check is.
//!
//! Domains are colon-separated segments from general to specific
//! (`attack`, `attack:melee`, `check:toxic`). Matching is exact string
//! equality only — a modifier on `attack` does not apply to an
//! `attack:melee` check unless the check also declares `attack`.
//! Hierarchical effects are modeled by emitting one rule element per
//! level. New domains require no engine changes, only new rule-element
//! emissions tagged with the new key.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A string key classifying a category of check.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Domain(String);

impl Domain {
    /// Create a domain from its string key.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// The full string key.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The colon-separated segments, general to specific.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split(':')
    }

    /// Melee attack checks.
    pub fn attack_melee() -> Self {
        Self::new("attack:melee")
    }

    /// Ranged attack checks.
    pub fn attack_ranged() -> Self {
        Self::new("attack:ranged")
    }

    /// Any attack check (declared alongside a specific attack domain).
    pub fn attack() -> Self {
        Self::new("attack")
    }

    /// Toughness tests against toxins and contaminants.
    pub fn check_toxic() -> Self {
        Self::new("check:toxic")
    }

    /// Willpower tests against fear.
    pub fn check_fear() -> Self {
        Self::new("check:fear")
    }

    /// Fellowship tests to requisition equipment.
    pub fn check_requisition() -> Self {
        Self::new("check:requisition")
    }
}

impl From<&str> for Domain {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segments_split_on_colons() {
        let domain = Domain::attack_melee();
        let segments: Vec<_> = domain.segments().collect();
        assert_eq!(segments, vec!["attack", "melee"]);
    }

    #[test]
    fn matching_is_exact_equality() {
        assert_eq!(Domain::new("attack:melee"), Domain::attack_melee());
        assert_ne!(Domain::attack(), Domain::attack_melee());
    }

    #[test]
    fn display_is_the_raw_key() {
        assert_eq!(Domain::check_toxic().to_string(), "check:toxic");
    }
}
