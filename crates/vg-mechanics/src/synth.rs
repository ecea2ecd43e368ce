//! The modifier synthesizer.
//!
//! Given an actor and the domains a check declares, produce the
//! complete ordered set of modifiers and flags in effect right now.
//! Sources are scanned in a fixed order: equipped items' stored rules,
//! then active conditions' stored rules, then any ad-hoc rules the
//! caller supplies for this resolution only (craftsmanship-derived
//! rules, hazard penalties). The synthesizer never errors — an actor
//! with no qualifying rules yields an empty set.

use tracing::debug;
use vg_core::{Actor, RuleElement};

use crate::domain::Domain;
use crate::modifier::{Modifier, ModifierSet, RollOptionFlag};

/// Gather every modifier and flag applicable to a check on `actor`
/// declaring `domains`, plus caller-supplied `ad_hoc` rules.
///
/// Idempotent: unchanged inputs produce an identical ordered set.
pub fn synthesize(actor: &Actor, domains: &[Domain], ad_hoc: &[RuleElement]) -> ModifierSet {
    let mut set = ModifierSet::default();

    for item in actor.equipped_items() {
        apply_rules(&mut set, &item.rules, domains);
    }
    for condition in &actor.conditions {
        apply_rules(&mut set, &condition.rules, domains);
    }
    apply_rules(&mut set, ad_hoc, domains);

    set
}

/// Interpret one stored rule-element list against the declared domains.
fn apply_rules(set: &mut ModifierSet, rules: &[RuleElement], domains: &[Domain]) {
    for rule in rules {
        match rule {
            RuleElement::FlatModifier {
                domain,
                value,
                label,
                source,
            } => {
                if domains.iter().any(|d| d.as_str() == domain) {
                    set.modifiers.push(Modifier {
                        label: label.clone(),
                        value: *value,
                        source: source.clone(),
                    });
                }
            }
            RuleElement::RollOption { option, label } => {
                set.options.push(RollOptionFlag {
                    option: option.clone(),
                    label: label.clone(),
                });
            }
            RuleElement::Unknown => {
                debug!("skipping unrecognized rule element kind");
            }
        }
    }
}
