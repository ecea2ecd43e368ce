use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the nine percentile characteristics an actor is rated in.
///
/// Characteristic values are percentile targets (typically 20-60) and
/// serve as the base target number for most checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Characteristic {
    /// Skill at close-quarters fighting.
    WeaponSkill,
    /// Skill with ranged weaponry.
    BallisticSkill,
    /// Raw physical power.
    Strength,
    /// Resilience against harm and toxins.
    Toughness,
    /// Speed and coordination.
    Agility,
    /// Reasoning and recall.
    Intelligence,
    /// Awareness of surroundings.
    Perception,
    /// Mental fortitude.
    Willpower,
    /// Presence and social standing.
    Fellowship,
}

impl Characteristic {
    /// All characteristics in their conventional sheet order.
    pub fn all() -> &'static [Self] {
        &[
            Self::WeaponSkill,
            Self::BallisticSkill,
            Self::Strength,
            Self::Toughness,
            Self::Agility,
            Self::Intelligence,
            Self::Perception,
            Self::Willpower,
            Self::Fellowship,
        ]
    }

    /// The two-letter abbreviation used on sheets and in logs.
    pub fn abbreviation(self) -> &'static str {
        match self {
            Self::WeaponSkill => "WS",
            Self::BallisticSkill => "BS",
            Self::Strength => "S",
            Self::Toughness => "T",
            Self::Agility => "Ag",
            Self::Intelligence => "Int",
            Self::Perception => "Per",
            Self::Willpower => "WP",
            Self::Fellowship => "Fel",
        }
    }

    /// Parse a characteristic from a name or abbreviation.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().replace([' ', '_', '-'], "").as_str() {
            "weaponskill" | "ws" => Some(Self::WeaponSkill),
            "ballisticskill" | "bs" => Some(Self::BallisticSkill),
            "strength" | "s" | "str" => Some(Self::Strength),
            "toughness" | "t" => Some(Self::Toughness),
            "agility" | "ag" | "agi" => Some(Self::Agility),
            "intelligence" | "int" => Some(Self::Intelligence),
            "perception" | "per" => Some(Self::Perception),
            "willpower" | "wp" | "will" => Some(Self::Willpower),
            "fellowship" | "fel" => Some(Self::Fellowship),
            _ => None,
        }
    }
}

impl fmt::Display for Characteristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WeaponSkill => write!(f, "Weapon Skill"),
            Self::BallisticSkill => write!(f, "Ballistic Skill"),
            Self::Strength => write!(f, "Strength"),
            Self::Toughness => write!(f, "Toughness"),
            Self::Agility => write!(f, "Agility"),
            Self::Intelligence => write!(f, "Intelligence"),
            Self::Perception => write!(f, "Perception"),
            Self::Willpower => write!(f, "Willpower"),
            Self::Fellowship => write!(f, "Fellowship"),
        }
    }
}
