//! The check resolver: one percentile test, start to finish.
//!
//! The resolver synthesizes modifiers, folds them into the base target,
//! rolls a d100, and classifies the outcome into degrees of success or
//! failure. It performs no rendering, no persistence, and no mutation
//! of the actor — those are caller responsibilities downstream of the
//! returned [`CheckResult`].

use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tracing::debug;
use vg_core::{Actor, Characteristic, RuleElement};

use crate::dice::{PercentileRoll, roll_d100};
use crate::domain::Domain;
use crate::error::{MechError, MechResult};
use crate::modifier::ModifierSet;
use crate::synth::synthesize;

/// The input bundle for one check resolution.
///
/// Mirrors the loose shape checks are requested in: only the actor and
/// at least one domain are mandatory; everything else has a sensible
/// default. `skip_confirmation` is carried for presentation layers that
/// show a confirmation dialog before rolling — the resolver itself is
/// always headless and never blocks on it.
#[derive(Debug, Clone, Default)]
pub struct CheckContext<'a> {
    /// The acting entity. Required.
    pub actor: Option<&'a Actor>,
    /// The characteristic under test, if the check is tied to one.
    pub characteristic: Option<Characteristic>,
    /// Target number before modifiers.
    pub base_target: i32,
    /// Human-readable label for the check.
    pub label: String,
    /// The domains this check declares itself under. Required,
    /// non-empty. A modifier applies if its domain equals any of these.
    pub domains: Vec<Domain>,
    /// Hint for interactive callers to skip their confirmation dialog.
    pub skip_confirmation: bool,
}

/// The degrees-of-success classification of a roll against a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Degrees {
    /// Whether the check passed.
    pub success: bool,
    /// Degrees of success (if passed) or failure (if not). Always >= 1.
    pub degrees: u32,
}

impl Degrees {
    /// Classify a percentile roll against an effective target.
    ///
    /// Success iff `roll <= target`, except that a natural 1 always
    /// succeeds — with the target clamped at 0 a near-impossible test
    /// would otherwise be unwinnable. Degrees count tens-digit buckets
    /// of the gap between roll and target and are never below 1.
    pub fn classify(roll: PercentileRoll, target: i32) -> Self {
        let value = roll.value as i32;
        if value <= target || roll.value == 1 {
            let margin = (target - value).max(0);
            Self {
                success: true,
                degrees: 1 + (margin / 10) as u32,
            }
        } else {
            Self {
                success: false,
                degrees: 1 + ((value - target) / 10) as u32,
            }
        }
    }
}

impl std::fmt::Display for Degrees {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.success {
            write!(f, "success ({} DoS)", self.degrees)
        } else {
            write!(f, "failure ({} DoF)", self.degrees)
        }
    }
}

/// The structured outcome of one resolution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckResult {
    /// Label carried from the context.
    pub label: String,
    /// Characteristic carried from the context.
    pub characteristic: Option<Characteristic>,
    /// The domains the check declared.
    pub domains: Vec<Domain>,
    /// The raw percentile roll.
    pub roll: PercentileRoll,
    /// The effective target after modifiers, clamped at 0.
    pub target: i32,
    /// Every modifier and flag applied, in source-scan order.
    pub modifiers: ModifierSet,
    /// The degrees classification.
    pub dos: Degrees,
}

/// Resolve one percentile check.
///
/// Synthesizes modifiers for the context's actor and domain set (plus
/// any `ad_hoc` rules supplied for this resolution only), computes the
/// effective target, rolls, and classifies. Fails only on an invalid
/// context; a check with no applicable modifiers is the ordinary
/// zero-modifier case.
pub fn resolve_check(
    ctx: &CheckContext<'_>,
    ad_hoc: &[RuleElement],
    rng: &mut StdRng,
) -> MechResult<CheckResult> {
    let actor = ctx.actor.ok_or(MechError::MissingActor)?;
    if ctx.domains.is_empty() {
        return Err(MechError::EmptyDomains);
    }

    let modifiers = synthesize(actor, &ctx.domains, ad_hoc);
    let target = (ctx.base_target + modifiers.total()).max(0);
    let roll = roll_d100(rng);
    let dos = Degrees::classify(roll, target);

    debug!(
        actor = %actor.id,
        label = %ctx.label,
        %roll,
        target,
        net = modifiers.total(),
        outcome = %dos,
        "check resolved"
    );

    Ok(CheckResult {
        label: ctx.label.clone(),
        characteristic: ctx.characteristic,
        domains: ctx.domains.clone(),
        roll,
        target,
        modifiers,
        dos,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use vg_core::{Item, ItemKind};

    fn melee_context(actor: &Actor, base_target: i32) -> CheckContext<'_> {
        CheckContext {
            actor: Some(actor),
            characteristic: Some(Characteristic::WeaponSkill),
            base_target,
            label: "Melee Attack".to_string(),
            domains: vec![Domain::attack_melee()],
            skip_confirmation: true,
        }
    }

    #[test]
    fn missing_actor_is_invalid_context() {
        let ctx = CheckContext {
            domains: vec![Domain::attack_melee()],
            ..CheckContext::default()
        };
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            resolve_check(&ctx, &[], &mut rng).unwrap_err(),
            MechError::MissingActor
        );
    }

    #[test]
    fn empty_domains_is_invalid_context() {
        let actor = Actor::new("Quintus");
        let ctx = CheckContext {
            actor: Some(&actor),
            ..CheckContext::default()
        };
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            resolve_check(&ctx, &[], &mut rng).unwrap_err(),
            MechError::EmptyDomains
        );
    }

    #[test]
    fn no_modifiers_is_a_valid_zero_modifier_case() {
        let actor = Actor::new("Quintus");
        let ctx = melee_context(&actor, 40);
        let mut rng = StdRng::seed_from_u64(1);
        let result = resolve_check(&ctx, &[], &mut rng).unwrap();
        assert_eq!(result.target, 40);
        assert!(result.modifiers.is_empty());
    }

    #[test]
    fn modifiers_shift_the_effective_target() {
        let actor = Actor::new("Quintus").with_item(
            Item::new("Sword", ItemKind::Weapon { melee: true })
                .equipped(true)
                .with_rule(RuleElement::flat_modifier(
                    "attack:melee",
                    -15,
                    "Unwieldy",
                    "equipment",
                )),
        );
        let ctx = melee_context(&actor, 40);
        let mut rng = StdRng::seed_from_u64(1);
        let result = resolve_check(&ctx, &[], &mut rng).unwrap();
        assert_eq!(result.target, 25);
        assert_eq!(result.modifiers.modifiers.len(), 1);
    }

    #[test]
    fn effective_target_clamps_at_zero() {
        let actor = Actor::new("Quintus");
        let ctx = melee_context(&actor, 10);
        let ad_hoc = [RuleElement::flat_modifier(
            "attack:melee",
            -60,
            "Hopeless",
            "situation",
        )];
        let mut rng = StdRng::seed_from_u64(1);
        let result = resolve_check(&ctx, &ad_hoc, &mut rng).unwrap();
        assert_eq!(result.target, 0);
    }

    #[test]
    fn resolution_is_deterministic_for_a_fixed_seed() {
        let actor = Actor::new("Quintus").with_item(
            Item::new("Sword", ItemKind::Weapon { melee: true })
                .equipped(true)
                .with_rule(RuleElement::flat_modifier(
                    "attack:melee",
                    5,
                    "Balanced",
                    "equipment",
                )),
        );
        let ctx = melee_context(&actor, 40);
        let mut rng1 = StdRng::seed_from_u64(42);
        let mut rng2 = StdRng::seed_from_u64(42);
        let r1 = resolve_check(&ctx, &[], &mut rng1).unwrap();
        let r2 = resolve_check(&ctx, &[], &mut rng2).unwrap();
        assert_eq!(r1.roll, r2.roll);
        assert_eq!(r1.target, r2.target);
        assert_eq!(r1.dos, r2.dos);
        assert_eq!(r1.modifiers, r2.modifiers);
    }

    #[test]
    fn degrees_match_the_tens_bucket_rule() {
        // The spec's worked example: target 45.
        let dos = Degrees::classify(PercentileRoll::new(30), 45);
        assert_eq!(dos, Degrees { success: true, degrees: 2 });

        let dof = Degrees::classify(PercentileRoll::new(70), 45);
        assert_eq!(dof, Degrees { success: false, degrees: 3 });
    }

    #[test]
    fn success_at_exact_target_is_one_degree() {
        let dos = Degrees::classify(PercentileRoll::new(45), 45);
        assert_eq!(dos, Degrees { success: true, degrees: 1 });
    }

    #[test]
    fn natural_one_succeeds_even_against_target_zero() {
        let dos = Degrees::classify(PercentileRoll::new(1), 0);
        assert_eq!(dos, Degrees { success: true, degrees: 1 });
    }

    #[test]
    fn roll_of_two_fails_against_target_zero() {
        let dof = Degrees::classify(PercentileRoll::new(2), 0);
        assert!(!dof.success);
        assert_eq!(dof.degrees, 1);
    }

    #[test]
    fn check_result_round_trips_through_json() {
        let actor = Actor::new("Quintus");
        let ctx = melee_context(&actor, 40);
        let mut rng = StdRng::seed_from_u64(13);
        let result = resolve_check(&ctx, &[], &mut rng).unwrap();
        let json = serde_json::to_string(&result).unwrap();
        let back: CheckResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back.roll, result.roll);
        assert_eq!(back.target, result.target);
        assert_eq!(back.dos, result.dos);
    }

    #[test]
    fn degrees_display() {
        assert_eq!(
            Degrees { success: true, degrees: 2 }.to_string(),
            "success (2 DoS)"
        );
        assert_eq!(
            Degrees { success: false, degrees: 1 }.to_string(),
            "failure (1 DoF)"
        );
    }

    proptest! {
        #[test]
        fn degrees_are_always_at_least_one(roll in 1u32..=100, target in -50i32..=150) {
            let dos = Degrees::classify(PercentileRoll::new(roll), target);
            prop_assert!(dos.degrees >= 1);
        }

        #[test]
        fn success_iff_roll_at_or_below_target_or_natural_one(
            roll in 1u32..=100,
            target in 0i32..=150,
        ) {
            let dos = Degrees::classify(PercentileRoll::new(roll), target);
            prop_assert_eq!(dos.success, roll as i32 <= target || roll == 1);
        }

        #[test]
        fn effective_target_is_never_negative(base in -100i32..=100, net in -100i32..=100) {
            prop_assert!((base + net).max(0) >= 0);
        }
    }
}
