//! Ad-hoc rule providers.
//!
//! Small pure functions that either feed the synthesizer (grade-derived
//! rule elements) or consume the resolver directly (hazard and
//! requisition flows). None of them hold state: every mapping is
//! re-derived per resolution, so changing a stored attribute (a
//! weapon's grade, an armour loadout) takes effect on the very next
//! check with no invalidation step.

pub mod armour;
pub mod craftsmanship;
pub mod hazards;
pub mod requisition;
pub mod tables;

pub use armour::aggregate_protection;
pub use craftsmanship::{armour_bonus, attack_rules};
pub use hazards::{HazardOutcome, toxic_exposure};
pub use requisition::{Availability, requisition_test};
pub use tables::{CRITICAL_EFFECTS, TOXIC_EFFECTS, TableLookup, lookup};
