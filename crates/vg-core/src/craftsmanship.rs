use std::fmt;

use serde::{Deserialize, Serialize};

/// The craftsmanship grade of a piece of equipment.
///
/// Grades are ordered from worst to best. The grade is stored as a plain
/// attribute on the item; the mechanical effects (attack modifiers,
/// armour bonuses) are derived fresh at resolution time and never
/// persisted, so regrading an item takes effect on the next check.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Craftsmanship {
    /// Shoddy work, prone to failure.
    Poor,
    /// Standard manufacture.
    #[default]
    Common,
    /// Well made.
    Good,
    /// Masterwork.
    Best,
}

impl Craftsmanship {
    /// All grades from worst to best.
    pub fn all() -> &'static [Self] {
        &[Self::Poor, Self::Common, Self::Good, Self::Best]
    }

    /// Parse a grade from a stored string.
    ///
    /// Unrecognized input falls back to `Common` — grade strings come
    /// from loosely-structured content and must not abort a resolution.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "poor" => Self::Poor,
            "good" => Self::Good,
            "best" => Self::Best,
            _ => Self::Common,
        }
    }
}

impl fmt::Display for Craftsmanship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Poor => write!(f, "poor"),
            Self::Common => write!(f, "common"),
            Self::Good => write!(f, "good"),
            Self::Best => write!(f, "best"),
        }
    }
}
