use tracing::{debug, info};

use natal_core::config::ScoringConfig;
use natal_core::errors::NatalResult;
use natal_core::model::{AnswerSet, DiagnosticResult, MatchBand, Question};

use crate::formula::{self, ScoreBreakdown};

/// The scoring engine. Thin stateful wrapper over the pure formula: holds
/// the policy configuration and adds instrumentation.
pub struct ScoringEngine {
    config: ScoringConfig,
}

impl ScoringEngine {
    /// Create an engine with the default (permissive) configuration.
    pub fn new() -> Self {
        Self {
            config: ScoringConfig::default(),
        }
    }

    pub fn with_config(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Score an answer set against a question list.
    pub fn score(
        &self,
        answers: &AnswerSet,
        questions: &[Question],
    ) -> NatalResult<DiagnosticResult> {
        debug!(
            questions = questions.len(),
            answered = answers.answered_count(),
            strict = self.config.strict,
            "scoring answer set"
        );
        let result = formula::compute(answers, questions, &self.config)?;
        info!(
            winner = %result.scores.highest(),
            matches = result.item_matches.len(),
            "diagnostic scored"
        );
        Ok(result)
    }

    /// Score with every intermediate number exposed.
    pub fn score_breakdown(
        &self,
        answers: &AnswerSet,
        questions: &[Question],
    ) -> NatalResult<ScoreBreakdown> {
        Ok(formula::compute_breakdown(answers, questions, &self.config)?)
    }

    /// Band rows for the per-question match table, one row per item match,
    /// each cell banded from the raw option weight.
    pub fn match_table(result: &DiagnosticResult) -> Vec<[MatchBand; 3]> {
        result.item_matches.iter().map(|item| item.bands()).collect()
    }
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::new()
    }
}
