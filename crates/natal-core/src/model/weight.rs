use std::fmt;
use std::ops::Index;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::constants::MAX_WEIGHT;
use crate::model::Archetype;

/// Per-archetype match weight clamped to [0, 100].
///
/// A weight expresses how strongly one answer option points at one archetype.
/// Weights are catalog data; the engine only reads and sums them.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(from = "u8", into = "u8")]
#[ts(export)]
pub struct Weight(u8);

impl Weight {
    /// High-match threshold — weights at or above this render as `◎`.
    pub const HIGH: u8 = 80;
    /// Medium-match threshold — renders as `◯`.
    pub const MEDIUM: u8 = 60;
    /// Low-match threshold — renders as `△`. Below it: `×`.
    pub const LOW: u8 = 40;

    /// Create a new Weight, clamping to [0, 100].
    pub fn new(value: u8) -> Self {
        Self(value.min(MAX_WEIGHT))
    }

    /// Raw percentage value.
    pub fn value(self) -> u8 {
        self.0
    }

    /// Qualitative band for the per-question match table.
    pub fn band(self) -> MatchBand {
        if self.0 >= Self::HIGH {
            MatchBand::High
        } else if self.0 >= Self::MEDIUM {
            MatchBand::Medium
        } else if self.0 >= Self::LOW {
            MatchBand::Low
        } else {
            MatchBand::None
        }
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl From<u8> for Weight {
    fn from(value: u8) -> Self {
        Self::new(value)
    }
}

impl From<Weight> for u8 {
    fn from(w: Weight) -> Self {
        w.0
    }
}

/// Qualitative bucket a raw weight falls into, used to render the
/// per-question match symbol. Banding always uses the raw option weight,
/// never the normalized archetype score. Ordering is strongest first, so
/// `High < Medium < Low < None`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum MatchBand {
    High,
    Medium,
    Low,
    None,
}

impl MatchBand {
    /// Display symbol used by the result view.
    pub fn symbol(self) -> &'static str {
        match self {
            MatchBand::High => "◎",
            MatchBand::Medium => "◯",
            MatchBand::Low => "△",
            MatchBand::None => "×",
        }
    }
}

/// One weight per archetype. Every option carries a complete map; a missing
/// archetype key is a parse error, not a zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct WeightMap {
    #[serde(rename = "natural-autonomy")]
    pub natural_autonomy: Weight,
    pub balanced: Weight,
    #[serde(rename = "solid-support")]
    pub solid_support: Weight,
}

impl WeightMap {
    pub fn new(natural_autonomy: u8, balanced: u8, solid_support: u8) -> Self {
        Self {
            natural_autonomy: Weight::new(natural_autonomy),
            balanced: Weight::new(balanced),
            solid_support: Weight::new(solid_support),
        }
    }

    pub fn get(&self, archetype: Archetype) -> Weight {
        match archetype {
            Archetype::NaturalAutonomy => self.natural_autonomy,
            Archetype::Balanced => self.balanced,
            Archetype::SolidSupport => self.solid_support,
        }
    }
}

impl Index<Archetype> for WeightMap {
    type Output = Weight;

    fn index(&self, archetype: Archetype) -> &Weight {
        match archetype {
            Archetype::NaturalAutonomy => &self.natural_autonomy,
            Archetype::Balanced => &self.balanced,
            Archetype::SolidSupport => &self.solid_support,
        }
    }
}
