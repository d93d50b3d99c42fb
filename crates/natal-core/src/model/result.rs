use std::ops::Index;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::model::{Archetype, MatchBand, OptionId, WeightMap};

/// Per-archetype normalized match percentage, each independently in [0, 100].
///
/// These are match strengths, not a distribution — they are not expected to
/// sum to anything in particular.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ArchetypeScores {
    #[serde(rename = "natural-autonomy")]
    pub natural_autonomy: u8,
    pub balanced: u8,
    #[serde(rename = "solid-support")]
    pub solid_support: u8,
}

impl ArchetypeScores {
    pub const ZERO: ArchetypeScores = ArchetypeScores {
        natural_autonomy: 0,
        balanced: 0,
        solid_support: 0,
    };

    pub fn get(&self, archetype: Archetype) -> u8 {
        match archetype {
            Archetype::NaturalAutonomy => self.natural_autonomy,
            Archetype::Balanced => self.balanced,
            Archetype::SolidSupport => self.solid_support,
        }
    }

    /// Sum of the three scores (fits u16; each score is ≤ 100).
    pub fn total(&self) -> u16 {
        self.natural_autonomy as u16 + self.balanced as u16 + self.solid_support as u16
    }

    /// Best-matching archetype. Ties resolve to the earlier entry in
    /// `Archetype::ALL` order.
    pub fn highest(&self) -> Archetype {
        let mut best = Archetype::NaturalAutonomy;
        for archetype in Archetype::ALL {
            if self.get(archetype) > self.get(best) {
                best = archetype;
            }
        }
        best
    }
}

impl Index<Archetype> for ArchetypeScores {
    type Output = u8;

    fn index(&self, archetype: Archetype) -> &u8 {
        match archetype {
            Archetype::NaturalAutonomy => &self.natural_autonomy,
            Archetype::Balanced => &self.balanced,
            Archetype::SolidSupport => &self.solid_support,
        }
    }
}

/// One of the three "what you value" channels in the result summary.
/// Each channel is fed by exactly one archetype's normalized score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum ValueChannel {
    Autonomy,
    Safety,
    Experience,
}

impl ValueChannel {
    /// The archetype whose normalized score feeds this channel.
    pub fn source_archetype(self) -> Archetype {
        match self {
            ValueChannel::Autonomy => Archetype::NaturalAutonomy,
            ValueChannel::Safety => Archetype::SolidSupport,
            ValueChannel::Experience => Archetype::Balanced,
        }
    }
}

/// The derived autonomy/safety/experience percentages. Whenever any
/// archetype scored above zero, the three sum to exactly 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ValuesTriple {
    pub autonomy: u8,
    pub safety: u8,
    pub experience: u8,
}

impl ValuesTriple {
    /// Degenerate all-zero result, used when every score is zero.
    pub const ZERO: ValuesTriple = ValuesTriple {
        autonomy: 0,
        safety: 0,
        experience: 0,
    };

    pub fn get(&self, channel: ValueChannel) -> u8 {
        match channel {
            ValueChannel::Autonomy => self.autonomy,
            ValueChannel::Safety => self.safety,
            ValueChannel::Experience => self.experience,
        }
    }

    pub fn sum(&self) -> u16 {
        self.autonomy as u16 + self.safety as u16 + self.experience as u16
    }
}

/// Raw per-question match record: which option was chosen and the weights it
/// carried. The result view bands these raw weights into quality symbols.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ItemMatch {
    /// 0-based question index.
    pub question_index: usize,
    pub choice: OptionId,
    pub weights: WeightMap,
}

impl ItemMatch {
    /// Band row for the match table, in `Archetype::ALL` order.
    pub fn bands(&self) -> [MatchBand; 3] {
        [
            self.weights.natural_autonomy.band(),
            self.weights.balanced.band(),
            self.weights.solid_support.band(),
        ]
    }
}

/// The complete outcome of a finished session. Computed once, immutable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DiagnosticResult {
    pub scores: ArchetypeScores,
    pub values: ValuesTriple,
    /// One entry per valid answer, in ascending question order.
    pub item_matches: Vec<ItemMatch>,
}
