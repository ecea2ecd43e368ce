//! Requisition tests.
//!
//! Acquiring equipment is a fellowship test under `check:requisition`,
//! shifted by how available the item is. The availability ladder is a
//! fixed mapping fed to the resolver as an ad-hoc rule element.

use std::fmt;

use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use vg_core::{Actor, Characteristic, RuleElement};

use crate::check::{CheckContext, CheckResult, resolve_check};
use crate::domain::Domain;
use crate::error::MechResult;

/// How available the requested item is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Availability {
    /// Found everywhere (+30).
    Abundant,
    /// Easy to come by (+20).
    Plentiful,
    /// Ordinary supply (0).
    Average,
    /// Hard to find (-10).
    Scarce,
    /// Seldom seen (-20).
    Rare,
    /// Almost one of a kind (-30).
    NearUnique,
}

impl Availability {
    /// The test modifier this availability tier grants.
    pub fn modifier(self) -> i32 {
        match self {
            Self::Abundant => 30,
            Self::Plentiful => 20,
            Self::Average => 0,
            Self::Scarce => -10,
            Self::Rare => -20,
            Self::NearUnique => -30,
        }
    }
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Abundant => write!(f, "Abundant"),
            Self::Plentiful => write!(f, "Plentiful"),
            Self::Average => write!(f, "Average"),
            Self::Scarce => write!(f, "Scarce"),
            Self::Rare => write!(f, "Rare"),
            Self::NearUnique => write!(f, "Near Unique"),
        }
    }
}

/// Resolve a requisition test for an item of the given availability.
///
/// A fellowship test under `check:requisition`; the availability shift
/// arrives as an ad-hoc rule element so it shows in the modifier trail
/// alongside anything the actor's gear or conditions contribute.
pub fn requisition_test(
    actor: &Actor,
    availability: Availability,
    rng: &mut StdRng,
) -> MechResult<CheckResult> {
    let ad_hoc = [RuleElement::flat_modifier(
        Domain::check_requisition().as_str(),
        availability.modifier(),
        availability.to_string(),
        "availability",
    )];

    let ctx = CheckContext {
        actor: Some(actor),
        characteristic: Some(Characteristic::Fellowship),
        base_target: actor.characteristic(Characteristic::Fellowship),
        label: format!("Requisition ({availability})"),
        domains: vec![Domain::check_requisition()],
        skip_confirmation: true,
    };
    resolve_check(&ctx, &ad_hoc, rng)
}
