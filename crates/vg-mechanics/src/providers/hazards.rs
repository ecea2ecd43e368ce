//! Environmental hazard handlers.
//!
//! Hazards consume the resolver headlessly: no confirmation dialog, no
//! rendering. The hazard's parameters arrive as explicit arguments, so
//! handlers carry no dependency on ambient game state.

use rand::rngs::StdRng;
use vg_core::{Actor, Characteristic, RuleElement};

use crate::check::{CheckContext, CheckResult, resolve_check};
use crate::domain::Domain;
use crate::error::MechResult;

use super::tables::{TOXIC_EFFECTS, TableLookup, lookup};

/// The result of a hazard exposure: the underlying check plus any
/// effect suffered on failure.
#[derive(Debug, Clone)]
pub struct HazardOutcome {
    /// The resolved toughness test.
    pub check: CheckResult,
    /// The effect suffered, `None` on a passed test.
    pub effect: Option<TableLookup<'static>>,
}

/// Resolve exposure to a toxin of the given severity.
///
/// Rolls a toughness test under `check:toxic` with a severity-scaled
/// penalty supplied as an ad-hoc rule element (so it appears in the
/// applied-modifier trail). On failure, the toxic effect table is
/// consulted at the severity escalated by the degrees of failure.
pub fn toxic_exposure(
    actor: &Actor,
    severity: u32,
    rng: &mut StdRng,
) -> MechResult<HazardOutcome> {
    let penalty = -(5 * severity as i32);
    let ad_hoc = [RuleElement::flat_modifier(
        Domain::check_toxic().as_str(),
        penalty,
        "Toxin Potency",
        "hazard",
    )];

    let ctx = CheckContext {
        actor: Some(actor),
        characteristic: Some(Characteristic::Toughness),
        base_target: actor.characteristic(Characteristic::Toughness),
        label: "Toxic Exposure".to_string(),
        domains: vec![Domain::check_toxic()],
        skip_confirmation: true,
    };
    let check = resolve_check(&ctx, &ad_hoc, rng)?;

    let effect = if check.dos.success {
        None
    } else {
        lookup(TOXIC_EFFECTS, severity + check.dos.degrees, rng)
    };

    Ok(HazardOutcome { check, effect })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn tough_actor(toughness: i32) -> Actor {
        Actor::new("Quintus").with_characteristic(Characteristic::Toughness, toughness)
    }

    #[test]
    fn penalty_scales_with_severity() {
        let actor = tough_actor(40);
        let mut rng = StdRng::seed_from_u64(11);
        let outcome = toxic_exposure(&actor, 3, &mut rng).unwrap();
        assert_eq!(outcome.check.target, 25);
        assert_eq!(outcome.check.modifiers.modifiers.len(), 1);
        assert_eq!(outcome.check.modifiers.modifiers[0].source, "hazard");
    }

    #[test]
    fn failed_test_always_has_an_effect() {
        // Toughness 0 with a severity penalty: only a natural 1 passes.
        let actor = tough_actor(0);
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..50 {
            let outcome = toxic_exposure(&actor, 4, &mut rng).unwrap();
            if outcome.check.dos.success {
                assert_eq!(outcome.check.roll.value, 1);
                assert!(outcome.effect.is_none());
            } else {
                assert!(outcome.effect.is_some());
            }
        }
    }

    #[test]
    fn exposure_is_deterministic_for_a_fixed_seed() {
        let actor = tough_actor(35);
        let mut rng1 = StdRng::seed_from_u64(77);
        let mut rng2 = StdRng::seed_from_u64(77);
        let o1 = toxic_exposure(&actor, 2, &mut rng1).unwrap();
        let o2 = toxic_exposure(&actor, 2, &mut rng2).unwrap();
        assert_eq!(o1.check.roll, o2.check.roll);
        assert_eq!(o1.effect, o2.effect);
    }

    #[test]
    fn headless_resolution_requires_no_confirmation() {
        let actor = tough_actor(30);
        let mut rng = StdRng::seed_from_u64(1);
        // Must resolve without any interactive step.
        let outcome = toxic_exposure(&actor, 1, &mut rng).unwrap();
        assert_eq!(outcome.check.label, "Toxic Exposure");
    }
}
