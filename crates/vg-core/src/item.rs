use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::craftsmanship::Craftsmanship;
use crate::location::HitLocation;
use crate::rules::RuleElement;

/// Unique identifier for an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId(pub Uuid);

impl ItemId {
    /// Generate a new random item ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// The kind of an item. Extensible via `Custom(String)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    /// A weapon usable in attacks.
    Weapon {
        /// True for melee weapons, false for ranged.
        melee: bool,
    },
    /// Protective gear covering one or more hit locations.
    Armour,
    /// Miscellaneous equipment.
    Gear,
    /// A user-defined item type.
    Custom(String),
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Weapon { melee: true } => write!(f, "melee weapon"),
            Self::Weapon { melee: false } => write!(f, "ranged weapon"),
            Self::Armour => write!(f, "armour"),
            Self::Gear => write!(f, "gear"),
            Self::Custom(s) => write!(f, "{s}"),
        }
    }
}

/// A physical item owned by an actor.
///
/// Items embed their stored rule elements; the list applies only while
/// the item is owned and equipped, and ceases to apply when the item is
/// removed. Craftsmanship is stored as a plain grade — its mechanical
/// effects are derived fresh at resolution time, never stored here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier.
    pub id: ItemId,
    /// Display name.
    pub name: String,
    /// What kind of item this is.
    pub kind: ItemKind,
    /// Whether the item is currently equipped. Unequipped items
    /// contribute neither rules nor protection.
    #[serde(default)]
    pub equipped: bool,
    /// Craftsmanship grade.
    #[serde(default)]
    pub craftsmanship: Craftsmanship,
    /// Stored rule elements.
    #[serde(default)]
    pub rules: Vec<RuleElement>,
    /// Armour protection per covered hit location. Locations with no
    /// entry are uncovered and read as zero.
    #[serde(default)]
    pub protection: HashMap<HitLocation, i32>,
}

impl Item {
    /// Create a new item of the given kind, unequipped, common grade.
    pub fn new(name: impl Into<String>, kind: ItemKind) -> Self {
        Self {
            id: ItemId::new(),
            name: name.into(),
            kind,
            equipped: false,
            craftsmanship: Craftsmanship::Common,
            rules: Vec::new(),
            protection: HashMap::new(),
        }
    }

    /// Set the equipped flag (builder style).
    pub fn equipped(mut self, equipped: bool) -> Self {
        self.equipped = equipped;
        self
    }

    /// Set the craftsmanship grade (builder style).
    pub fn craftsmanship(mut self, grade: Craftsmanship) -> Self {
        self.craftsmanship = grade;
        self
    }

    /// Append a stored rule element (builder style).
    pub fn with_rule(mut self, rule: RuleElement) -> Self {
        self.rules.push(rule);
        self
    }

    /// Set the protection value for a hit location (builder style).
    pub fn protecting(mut self, location: HitLocation, value: i32) -> Self {
        self.protection.insert(location, value);
        self
    }

    /// Protection on a location, zero if the location is uncovered.
    pub fn protection_at(&self, location: HitLocation) -> i32 {
        self.protection.get(&location).copied().unwrap_or(0)
    }

    /// True if this item is armour.
    pub fn is_armour(&self) -> bool {
        self.kind == ItemKind::Armour
    }
}
