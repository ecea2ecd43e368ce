//! Core data model for Vigil: actors, items, conditions, and rule elements.
//!
//! This crate defines the entity layer the mechanics engine reads. It is
//! pure data — you can construct an [`Actor`] programmatically or
//! deserialize one from JSON; all resolution behavior lives in
//! `vg-mechanics`.

/// Actors and the conditions/traits attached to them.
pub mod actor;
/// The nine percentile characteristics.
pub mod characteristic;
/// Equipment craftsmanship grades.
pub mod craftsmanship;
/// Error types used throughout the crate.
pub mod error;
/// Items: weapons, armour, and gear owned by actors.
pub mod item;
/// Anatomical hit locations and the percentile location table.
pub mod location;
/// Declarative rule elements embedded on owning entities.
pub mod rules;

/// Re-export actor types.
pub use actor::{Actor, ActorId, Condition, ConditionKind};
/// Re-export the characteristic enum.
pub use characteristic::Characteristic;
/// Re-export the craftsmanship grade.
pub use craftsmanship::Craftsmanship;
/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export item types.
pub use item::{Item, ItemId, ItemKind};
/// Re-export hit locations.
pub use location::HitLocation;
/// Re-export the rule element model.
pub use rules::RuleElement;
