use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::characteristic::Characteristic;
use crate::item::Item;
use crate::rules::RuleElement;

/// Unique identifier for an actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActorId(pub Uuid);

impl ActorId {
    /// Generate a new random actor ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ActorId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// What sort of ongoing effect a condition represents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConditionKind {
    /// A transient condition (stunned, pinned, blinded).
    Condition,
    /// An innate trait.
    Trait,
    /// A learned talent.
    Talent,
    /// A physical corruption.
    Malignancy,
    /// A mental disorder.
    MentalDisorder,
    /// A user-defined effect category.
    Custom(String),
}

impl fmt::Display for ConditionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Condition => write!(f, "condition"),
            Self::Trait => write!(f, "trait"),
            Self::Talent => write!(f, "talent"),
            Self::Malignancy => write!(f, "malignancy"),
            Self::MentalDisorder => write!(f, "mental disorder"),
            Self::Custom(s) => write!(f, "{s}"),
        }
    }
}

/// An ongoing effect attached to an actor.
///
/// Conditions embed their stored rule elements; removing the condition
/// removes its rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Condition {
    /// Display name.
    pub name: String,
    /// The category of effect.
    pub kind: ConditionKind,
    /// Stored rule elements.
    #[serde(default)]
    pub rules: Vec<RuleElement>,
}

impl Condition {
    /// Create a condition with no rules.
    pub fn new(name: impl Into<String>, kind: ConditionKind) -> Self {
        Self {
            name: name.into(),
            kind,
            rules: Vec::new(),
        }
    }

    /// Append a stored rule element (builder style).
    pub fn with_rule(mut self, rule: RuleElement) -> Self {
        self.rules.push(rule);
        self
    }
}

/// An acting entity: a character, creature, or NPC.
///
/// The mechanics engine only ever reads an actor — it enumerates owned
/// items and active conditions and never mutates them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Actor {
    /// Unique identifier.
    pub id: ActorId,
    /// Display name.
    pub name: String,
    /// Characteristic ratings. Missing entries read as zero.
    #[serde(default)]
    pub characteristics: HashMap<Characteristic, i32>,
    /// Owned items, equipped or not.
    #[serde(default)]
    pub items: Vec<Item>,
    /// Active conditions, traits, talents, malignancies, and disorders.
    #[serde(default)]
    pub conditions: Vec<Condition>,
}

impl Actor {
    /// Create a new actor with no items or conditions.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: ActorId::new(),
            name: name.into(),
            characteristics: HashMap::new(),
            items: Vec::new(),
            conditions: Vec::new(),
        }
    }

    /// Set a characteristic rating (builder style).
    pub fn with_characteristic(mut self, characteristic: Characteristic, value: i32) -> Self {
        self.characteristics.insert(characteristic, value);
        self
    }

    /// Add an owned item (builder style).
    pub fn with_item(mut self, item: Item) -> Self {
        self.items.push(item);
        self
    }

    /// Attach a condition (builder style).
    pub fn with_condition(mut self, condition: Condition) -> Self {
        self.conditions.push(condition);
        self
    }

    /// A characteristic rating, zero if unrated.
    pub fn characteristic(&self, characteristic: Characteristic) -> i32 {
        self.characteristics
            .get(&characteristic)
            .copied()
            .unwrap_or(0)
    }

    /// Iterate over currently equipped items, in ownership order.
    pub fn equipped_items(&self) -> impl Iterator<Item = &Item> {
        self.items.iter().filter(|i| i.equipped)
    }

    /// Iterate over owned armour items (equipped or not).
    pub fn armour(&self) -> impl Iterator<Item = &Item> {
        self.items.iter().filter(|i| i.is_armour())
    }
}
