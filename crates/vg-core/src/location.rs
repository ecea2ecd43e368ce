use std::fmt;

use serde::{Deserialize, Serialize};

/// An anatomical hit location on a humanoid target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HitLocation {
    /// The head.
    Head,
    /// The right arm.
    RightArm,
    /// The left arm.
    LeftArm,
    /// The torso.
    Body,
    /// The right leg.
    RightLeg,
    /// The left leg.
    LeftLeg,
}

impl HitLocation {
    /// All hit locations in location-table order.
    pub fn all() -> &'static [Self] {
        &[
            Self::Head,
            Self::RightArm,
            Self::LeftArm,
            Self::Body,
            Self::RightLeg,
            Self::LeftLeg,
        ]
    }

    /// Map a percentile value to a hit location.
    ///
    /// By convention the attack roll's digits are reversed to locate the
    /// hit (a roll of 37 strikes location 73); pass the reversed value
    /// here. Values are clamped into 1-100, with 100 reading as 00.
    pub fn from_roll(value: u32) -> Self {
        match value.clamp(1, 100) {
            1..=10 => Self::Head,
            11..=20 => Self::RightArm,
            21..=30 => Self::LeftArm,
            31..=70 => Self::Body,
            71..=85 => Self::RightLeg,
            _ => Self::LeftLeg,
        }
    }
}

impl fmt::Display for HitLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Head => write!(f, "Head"),
            Self::RightArm => write!(f, "Right Arm"),
            Self::LeftArm => write!(f, "Left Arm"),
            Self::Body => write!(f, "Body"),
            Self::RightLeg => write!(f, "Right Leg"),
            Self::LeftLeg => write!(f, "Left Leg"),
        }
    }
}
