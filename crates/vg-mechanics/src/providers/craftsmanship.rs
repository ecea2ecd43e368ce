//! Craftsmanship grade mappings.
//!
//! A weapon stores only its grade string; the rule elements below are
//! generated fresh for every check and never persisted against the
//! item, so regrading never leaves stale rules behind.

use vg_core::{Craftsmanship, RuleElement};

use crate::domain::Domain;

/// Attack modifier for a craftsmanship grade.
fn attack_delta(grade: Craftsmanship) -> i32 {
    match grade {
        Craftsmanship::Poor => -10,
        Craftsmanship::Common => 0,
        Craftsmanship::Good => 5,
        Craftsmanship::Best => 10,
    }
}

/// Display label for a grade's derived rules.
fn grade_label(grade: Craftsmanship) -> &'static str {
    match grade {
        Craftsmanship::Poor => "Poor Craftsmanship",
        Craftsmanship::Common => "Common Craftsmanship",
        Craftsmanship::Good => "Good Craftsmanship",
        Craftsmanship::Best => "Best Craftsmanship",
    }
}

/// The ad-hoc rule elements a weapon's grade contributes to an attack.
///
/// Common grade emits nothing. Other grades emit a roll-option token
/// plus a flat-modifier pair — one per attack domain, because domain
/// matching is exact, with identical deltas on melee and ranged.
pub fn attack_rules(grade: Craftsmanship) -> Vec<RuleElement> {
    let delta = attack_delta(grade);
    if delta == 0 {
        return Vec::new();
    }
    let label = grade_label(grade);
    vec![
        RuleElement::roll_option(format!("weapon:craftsmanship:{grade}"), label),
        RuleElement::flat_modifier(
            Domain::attack_melee().as_str(),
            delta,
            label,
            "craftsmanship",
        ),
        RuleElement::flat_modifier(
            Domain::attack_ranged().as_str(),
            delta,
            label,
            "craftsmanship",
        ),
    ]
}

/// Armour protection delta per covered hit location.
///
/// Note the asymmetry with [`attack_rules`]: good craftsmanship grants
/// an attack bonus but no armour change.
pub fn armour_bonus(grade: Craftsmanship) -> i32 {
    match grade {
        Craftsmanship::Poor => -1,
        Craftsmanship::Common | Craftsmanship::Good => 0,
        Craftsmanship::Best => 1,
    }
}
