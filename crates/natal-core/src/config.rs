use serde::{Deserialize, Serialize};

use crate::model::ValueChannel;

/// Scoring engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Which value channel absorbs the ±1 rounding correction that keeps the
    /// values triple summing to exactly 100. Deliberately asymmetric; the
    /// reference behavior always favors autonomy.
    pub tie_break_channel: ValueChannel,
    /// When true, an answer referencing an unknown option id fails scoring
    /// instead of being silently skipped.
    pub strict: bool,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            tie_break_channel: ValueChannel::Autonomy,
            strict: false,
        }
    }
}
