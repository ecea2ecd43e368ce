//! Percentile and small-range dice.
//!
//! All rolling functions take `&mut StdRng` so callers control seeding
//! and every resolution is replayable in tests.

use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

/// The raw outcome of one percentile roll (1-100).
///
/// A roll of 100 conventionally reads as 00, so its digit
/// decomposition is (0, 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PercentileRoll {
    /// The rolled value, 1-100.
    pub value: u32,
}

impl PercentileRoll {
    /// Wrap a raw value, clamping into the 1-100 range.
    pub fn new(value: u32) -> Self {
        Self {
            value: value.clamp(1, 100),
        }
    }

    /// The tens digit (0-9). A roll of 100 reads as 00.
    pub fn tens(self) -> u32 {
        if self.value == 100 { 0 } else { self.value / 10 }
    }

    /// The units digit (0-9).
    pub fn units(self) -> u32 {
        self.value % 10
    }

    /// The digits reversed, as a percentile value (37 becomes 73).
    ///
    /// Used for hit location determination. A reversed 00 reads as 100.
    pub fn reversed(self) -> u32 {
        let reversed = self.units() * 10 + self.tens();
        if reversed == 0 { 100 } else { reversed }
    }

    /// True if both digits match (11, 22, ..., 99, or 00).
    pub fn is_doubles(self) -> bool {
        self.tens() == self.units()
    }
}

impl std::fmt::Display for PercentileRoll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.value == 100 {
            write!(f, "00")
        } else {
            write!(f, "{:02}", self.value)
        }
    }
}

/// Roll one percentile die (uniform 1-100).
pub fn roll_d100(rng: &mut StdRng) -> PercentileRoll {
    PercentileRoll {
        value: rng.random_range(1..=100),
    }
}

/// Roll one five-sided die (uniform 1-5), used for table draws.
pub fn roll_d5(rng: &mut StdRng) -> u32 {
    rng.random_range(1..=5)
}
