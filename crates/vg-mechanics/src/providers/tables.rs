//! Severity-ordered outcome tables.
//!
//! A clamp-and-lookup pattern reused anywhere escalating severity
//! selects from a fixed ordered table: draw a small-range roll, add the
//! severity, and take the row at that index — or the last (most severe)
//! row when the total runs off the end. Escalation never leaves an
//! outcome undefined.

use rand::rngs::StdRng;

use crate::dice::roll_d5;

/// Toxic exposure effects, least to most severe.
pub const TOXIC_EFFECTS: &[&str] = &[
    "Nausea: -10 to all tests for one round",
    "Vomiting: lose one half action next turn",
    "Dizziness: half movement for 1d5 rounds",
    "Weakness: -10 Strength for one hour",
    "Tremors: -10 to all tests for 1d5 hours",
    "Blurred vision: -20 Perception for 1d5 hours",
    "Collapse: knocked prone, stunned for one round",
    "Convulsions: stunned for 1d5 rounds",
    "Organ damage: 1d10 damage ignoring armour",
    "Systemic failure: 2d10 damage ignoring armour and unconsciousness",
];

/// Critical hit effects, least to most severe.
pub const CRITICAL_EFFECTS: &[&str] = &[
    "A glancing wound: +1 damage",
    "A painful strike: target is at -10 until end of next round",
    "A staggering blow: target loses its next half action",
    "A deep wound: 2 additional damage and bleeding",
    "A crippling hit: the struck location is useless for one round",
    "A brutal impact: target is knocked prone",
    "A shattering strike: the struck location is broken",
    "A grievous wound: blood loss and 1d10 additional damage",
    "A maiming blow: the struck location is destroyed",
    "A lethal strike: the target is slain outright",
];

/// One selected row from a severity table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableLookup<'a> {
    /// The small-range draw that selected the row.
    pub draw: u32,
    /// The selected 1-based index after clamping.
    pub index: usize,
    /// The selected row.
    pub row: &'a str,
}

/// The 1-based row index selected by a draw at a given severity.
///
/// `min(len, draw + severity)` — totals past the end clamp to the last
/// row.
pub fn table_index(len: usize, draw: u32, severity: u32) -> usize {
    len.min((draw + severity) as usize)
}

/// Select a row from a severity-ordered table.
///
/// Draws a d5, adds `severity`, clamps to the table's last row. Returns
/// `None` only for an empty table.
pub fn lookup<'a>(table: &'a [&'a str], severity: u32, rng: &mut StdRng) -> Option<TableLookup<'a>> {
    if table.is_empty() {
        return None;
    }
    let draw = roll_d5(rng);
    let index = table_index(table.len(), draw, severity);
    Some(TableLookup {
        draw,
        index,
        row: table[index - 1],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn index_is_draw_plus_severity() {
        assert_eq!(table_index(10, 2, 3), 5);
        assert_eq!(table_index(10, 1, 0), 1);
    }

    #[test]
    fn index_clamps_to_last_row() {
        // Severity 6 on a 10-row table: min(10, draw + 6).
        for draw in 1..=5 {
            assert_eq!(table_index(10, draw, 6), 10.min(draw as usize + 6));
        }
        assert_eq!(table_index(10, 5, 50), 10);
    }

    #[test]
    fn lookup_returns_a_row_for_any_severity() {
        let mut rng = StdRng::seed_from_u64(3);
        for severity in 0..30 {
            let hit = lookup(TOXIC_EFFECTS, severity, &mut rng).unwrap();
            assert!((1..=TOXIC_EFFECTS.len()).contains(&hit.index));
            assert_eq!(hit.row, TOXIC_EFFECTS[hit.index - 1]);
        }
    }

    #[test]
    fn extreme_severity_selects_the_most_severe_row() {
        let mut rng = StdRng::seed_from_u64(3);
        let hit = lookup(CRITICAL_EFFECTS, 99, &mut rng).unwrap();
        assert_eq!(hit.index, CRITICAL_EFFECTS.len());
        assert_eq!(hit.row, CRITICAL_EFFECTS[CRITICAL_EFFECTS.len() - 1]);
    }

    #[test]
    fn empty_table_yields_none() {
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(lookup(&[], 2, &mut rng), None);
    }

    #[test]
    fn built_in_tables_have_ten_rows() {
        assert_eq!(TOXIC_EFFECTS.len(), 10);
        assert_eq!(CRITICAL_EFFECTS.len(), 10);
    }
}
