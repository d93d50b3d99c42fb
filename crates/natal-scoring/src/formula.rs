use natal_core::config::ScoringConfig;
use natal_core::constants::MAX_WEIGHT;
use natal_core::errors::ScoringError;
use natal_core::model::{
    AnswerSet, Archetype, ArchetypeScores, DiagnosticResult, ItemMatch, Question, ValueChannel,
    ValuesTriple,
};

/// Value channels in storage order: autonomy, safety, experience.
const CHANNELS: [ValueChannel; 3] = [
    ValueChannel::Autonomy,
    ValueChannel::Safety,
    ValueChannel::Experience,
];

fn channel_index(channel: ValueChannel) -> usize {
    match channel {
        ValueChannel::Autonomy => 0,
        ValueChannel::Safety => 1,
        ValueChannel::Experience => 2,
    }
}

/// Map an answer set to a diagnostic result.
///
/// Permissive mode (the default) skips unanswered slots and answers whose
/// option id is not on the question: they contribute no weight and emit no
/// match entry, so a single bad entry never prevents a result. Strict mode
/// turns both cases into typed errors.
pub fn compute(
    answers: &AnswerSet,
    questions: &[Question],
    config: &ScoringConfig,
) -> Result<DiagnosticResult, ScoringError> {
    let (totals, item_matches) = accumulate(answers, questions, config)?;
    let scores = normalize(totals, questions.len());
    let (values, _, _) = derive_values(scores, config.tie_break_channel);
    Ok(DiagnosticResult {
        scores,
        values,
        item_matches,
    })
}

/// Intermediate numbers behind a result, for debugging and observability.
#[derive(Debug, Clone)]
pub struct ScoreBreakdown {
    /// Raw per-archetype weight sums, in `Archetype::ALL` order.
    pub raw_totals: [u32; 3],
    /// Normalization divisor: `questions × 100`.
    pub divisor: u32,
    pub scores: ArchetypeScores,
    /// Channel values before the rounding correction, in
    /// autonomy/safety/experience order.
    pub uncorrected_values: [i32; 3],
    /// The correction applied to make the values sum to 100 (−1, 0, or +1).
    pub correction: i32,
    pub values: ValuesTriple,
}

/// Same computation as [`compute`], exposing every intermediate step.
pub fn compute_breakdown(
    answers: &AnswerSet,
    questions: &[Question],
    config: &ScoringConfig,
) -> Result<ScoreBreakdown, ScoringError> {
    let (totals, _) = accumulate(answers, questions, config)?;
    let scores = normalize(totals, questions.len());
    let (values, uncorrected_values, correction) =
        derive_values(scores, config.tie_break_channel);
    Ok(ScoreBreakdown {
        raw_totals: totals,
        divisor: questions.len() as u32 * MAX_WEIGHT as u32,
        scores,
        uncorrected_values,
        correction,
        values,
    })
}

fn accumulate(
    answers: &AnswerSet,
    questions: &[Question],
    config: &ScoringConfig,
) -> Result<([u32; 3], Vec<ItemMatch>), ScoringError> {
    if config.strict && answers.len() != questions.len() {
        return Err(ScoringError::LengthMismatch {
            answers: answers.len(),
            questions: questions.len(),
        });
    }

    let mut totals = [0u32; 3];
    let mut item_matches = Vec::with_capacity(questions.len());

    for (index, question) in questions.iter().enumerate() {
        let Some(choice) = answers.get(index) else {
            if config.strict {
                return Err(ScoringError::Unanswered {
                    question_index: index,
                });
            }
            tracing::debug!(question_index = index, "unanswered question skipped");
            continue;
        };
        let Some(option) = question.option(choice) else {
            if config.strict {
                return Err(ScoringError::UnknownOption {
                    question_index: index,
                    id: choice.as_str().to_string(),
                });
            }
            tracing::debug!(
                question_index = index,
                id = %choice,
                "unknown option skipped"
            );
            continue;
        };

        for (slot, archetype) in totals.iter_mut().zip(Archetype::ALL) {
            *slot += option.weights.get(archetype).value() as u32;
        }
        item_matches.push(ItemMatch {
            question_index: index,
            choice: choice.clone(),
            weights: option.weights,
        });
    }

    Ok((totals, item_matches))
}

/// Scale each archetype total against the attainable maximum
/// (`questions × 100`) to a 0–100 percentage, rounding half away from zero.
/// An empty catalog normalizes to all zeros rather than dividing by zero.
fn normalize(totals: [u32; 3], question_count: usize) -> ArchetypeScores {
    let divisor = question_count as u32 * MAX_WEIGHT as u32;
    if divisor == 0 {
        return ArchetypeScores::ZERO;
    }
    let percent = |total: u32| (total as f64 / divisor as f64 * 100.0).round() as u8;
    ArchetypeScores {
        natural_autonomy: percent(totals[0]),
        balanced: percent(totals[1]),
        solid_support: percent(totals[2]),
    }
}

/// Derive the values triple from the normalized scores.
///
/// Each channel takes its source archetype's share of the summed scores.
/// Independent rounding can leave the three at 99 or 101, so the difference
/// is absorbed by `tie_break` — an intentionally asymmetric policy. In the
/// degenerate case where the policy channel sits at 0 and the correction is
/// negative, the largest channel absorbs it instead so no channel goes
/// negative. A zero score total yields `{0, 0, 0}` outright.
fn derive_values(
    scores: ArchetypeScores,
    tie_break: ValueChannel,
) -> (ValuesTriple, [i32; 3], i32) {
    let total = scores.total();
    if total == 0 {
        return (ValuesTriple::ZERO, [0; 3], 0);
    }

    let share = |channel: ValueChannel| {
        let source = scores.get(channel.source_archetype()) as f64;
        (source / total as f64 * 100.0).round() as i32
    };
    let uncorrected = CHANNELS.map(share);
    let mut corrected = uncorrected;

    let sum: i32 = corrected.iter().sum();
    let correction = 100 - sum;
    if correction != 0 {
        let mut target = channel_index(tie_break);
        if corrected[target] + correction < 0 {
            // Rounding error never exceeds ±1, so some channel can absorb it.
            target = (0..3).max_by_key(|&i| corrected[i]).unwrap_or(target);
        }
        corrected[target] += correction;
    }

    let triple = ValuesTriple {
        autonomy: corrected[0] as u8,
        safety: corrected[1] as u8,
        experience: corrected[2] as u8,
    };
    (triple, uncorrected, correction)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_scores_yield_zero_values() {
        let (values, _, correction) =
            derive_values(ArchetypeScores::ZERO, ValueChannel::Autonomy);
        assert_eq!(values, ValuesTriple::ZERO);
        assert_eq!(correction, 0);
    }

    #[test]
    fn correction_lands_on_the_configured_channel() {
        // 1 / 7 / 0 over a total of 8: 12.5 + 87.5 + 0 rounds to 13 + 88 + 0
        // = 101, so autonomy absorbs the −1.
        let scores = ArchetypeScores {
            natural_autonomy: 1,
            balanced: 7,
            solid_support: 0,
        };
        let (values, uncorrected, correction) =
            derive_values(scores, ValueChannel::Autonomy);
        assert_eq!(uncorrected, [13, 0, 88]);
        assert_eq!(correction, -1);
        assert_eq!(values.autonomy, 12);
        assert_eq!(values.sum(), 100);
    }

    #[test]
    fn negative_correction_spills_to_the_largest_channel_at_zero() {
        // 0 / 7 / 1: autonomy rounds to 0 and cannot absorb the −1, so the
        // largest channel (experience, 88) takes it.
        let scores = ArchetypeScores {
            natural_autonomy: 0,
            balanced: 7,
            solid_support: 1,
        };
        let (values, _, correction) = derive_values(scores, ValueChannel::Autonomy);
        assert_eq!(correction, -1);
        assert_eq!(values.autonomy, 0);
        assert_eq!(values.experience, 87);
        assert_eq!(values.sum(), 100);
    }

    #[test]
    fn empty_question_list_normalizes_to_zero() {
        assert_eq!(normalize([0, 0, 0], 0), ArchetypeScores::ZERO);
    }

    #[test]
    fn normalization_is_per_archetype_independent() {
        // 4 questions: totals of 340 / 165 / 75 → 85 / 41 / 19.
        let scores = normalize([340, 165, 75], 4);
        assert_eq!(scores.natural_autonomy, 85);
        assert_eq!(scores.balanced, 41);
        assert_eq!(scores.solid_support, 19);
    }
}
