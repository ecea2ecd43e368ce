//! d100 check resolution and domain modifier synthesis for Vigil.
//!
//! Every gameplay action — attacks, skill tests, environmental hazards,
//! requisition, toughness saves — funnels through this engine: the
//! synthesizer gathers situational modifiers from equipped gear,
//! craftsmanship, and conditions; the resolver rolls a percentile test
//! and classifies the outcome into degrees of success or failure.

pub mod check;
pub mod dice;
pub mod domain;
pub mod error;
pub mod modifier;
pub mod providers;
pub mod synth;

pub use check::{CheckContext, CheckResult, Degrees, resolve_check};
pub use dice::PercentileRoll;
pub use domain::Domain;
pub use error::{MechError, MechResult};
pub use modifier::{Modifier, ModifierSet, RollOptionFlag};
pub use synth::synthesize;
