use proptest::prelude::*;

use natal_core::model::{AnswerSet, OptionId, Question, QuestionOption, ValuesTriple, WeightMap};
use natal_scoring::ScoringEngine;

const IDS: [&str; 3] = ["a", "b", "c"];

type WeightTriple = (u8, u8, u8);
/// One generated question: weights for its three options, plus the user's
/// choice (None = left unanswered).
type QuestionCase = ((WeightTriple, WeightTriple, WeightTriple), Option<u8>);

fn arb_weights() -> impl Strategy<Value = WeightTriple> {
    (0u8..=100, 0u8..=100, 0u8..=100)
}

fn arb_cases() -> impl Strategy<Value = Vec<QuestionCase>> {
    prop::collection::vec(
        (
            (arb_weights(), arb_weights(), arb_weights()),
            prop::option::of(0u8..3),
        ),
        1..8,
    )
}

fn build(cases: &[QuestionCase]) -> (Vec<Question>, AnswerSet) {
    let questions = cases
        .iter()
        .enumerate()
        .map(|(index, ((w0, w1, w2), _))| Question {
            step: index as u32 + 1,
            prompt: format!("question {}", index + 1),
            options: [w0, w1, w2]
                .iter()
                .zip(IDS)
                .map(|(w, id)| QuestionOption {
                    id: OptionId::from(id),
                    text: format!("option {id}"),
                    icon: "·".to_string(),
                    weights: WeightMap::new(w.0, w.1, w.2),
                })
                .collect(),
        })
        .collect();

    let mut answers = AnswerSet::new(cases.len());
    for (index, (_, choice)) in cases.iter().enumerate() {
        if let Some(choice) = choice {
            answers
                .select(index, OptionId::from(IDS[*choice as usize]))
                .unwrap();
        }
    }
    (questions, answers)
}

proptest! {
    #[test]
    fn normalized_scores_stay_within_percent_range(cases in arb_cases()) {
        let (questions, answers) = build(&cases);
        let result = ScoringEngine::new().score(&answers, &questions).unwrap();
        prop_assert!(result.scores.natural_autonomy <= 100);
        prop_assert!(result.scores.balanced <= 100);
        prop_assert!(result.scores.solid_support <= 100);
    }

    #[test]
    fn values_sum_to_exactly_100_or_are_all_zero(cases in arb_cases()) {
        let (questions, answers) = build(&cases);
        let result = ScoringEngine::new().score(&answers, &questions).unwrap();
        if result.scores.total() > 0 {
            prop_assert_eq!(result.values.sum(), 100);
        } else {
            prop_assert_eq!(result.values, ValuesTriple::ZERO);
        }
        prop_assert!(result.values.autonomy <= 100);
        prop_assert!(result.values.safety <= 100);
        prop_assert!(result.values.experience <= 100);
    }

    #[test]
    fn one_match_entry_per_answer_in_ascending_order(cases in arb_cases()) {
        let (questions, answers) = build(&cases);
        let result = ScoringEngine::new().score(&answers, &questions).unwrap();

        prop_assert_eq!(result.item_matches.len(), answers.answered_count());
        for pair in result.item_matches.windows(2) {
            prop_assert!(pair[0].question_index < pair[1].question_index);
        }
        for item in &result.item_matches {
            prop_assert!(answers.answered(item.question_index));
        }
    }

    #[test]
    fn scoring_is_deterministic(cases in arb_cases()) {
        let (questions, answers) = build(&cases);
        let engine = ScoringEngine::new();
        let first = engine.score(&answers, &questions).unwrap();
        let second = engine.score(&answers, &questions).unwrap();
        prop_assert_eq!(first, second);
    }
}
