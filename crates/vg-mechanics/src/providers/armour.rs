//! Armour coverage aggregation.

use std::collections::BTreeMap;

use vg_core::{HitLocation, Item};

use super::craftsmanship::armour_bonus;

/// Aggregate per-location protection across a set of armour items.
///
/// Only items currently marked equipped contribute; unequipped items
/// and non-armour items contribute zero. Each equipped armour item adds
/// its stored protection plus its craftsmanship delta for every
/// location it covers; locations an item has no entry for are simply
/// uncovered by that item, never an error.
pub fn aggregate_protection<'a>(
    items: impl IntoIterator<Item = &'a Item>,
) -> BTreeMap<HitLocation, i32> {
    let mut coverage = BTreeMap::new();
    for item in items {
        if !item.equipped || !item.is_armour() {
            continue;
        }
        let bonus = armour_bonus(item.craftsmanship);
        for (&location, &value) in &item.protection {
            *coverage.entry(location).or_insert(0) += value + bonus;
        }
    }
    coverage
}
