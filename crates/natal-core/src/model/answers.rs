use serde::{Deserialize, Serialize};

use crate::errors::FlowError;
use crate::model::OptionId;

/// The ordered collection of a user's choices across all questions in a
/// session. One slot per question; an unanswered question is `None`, never a
/// sentinel id. Mutated one slot at a time as the user answers or revisits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerSet {
    slots: Vec<Option<OptionId>>,
}

impl AnswerSet {
    /// Create an empty answer set for `question_count` questions.
    pub fn new(question_count: usize) -> Self {
        Self {
            slots: vec![None; question_count],
        }
    }

    /// Number of question slots (answered or not).
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Set or overwrite the answer at `index`.
    pub fn select(&mut self, index: usize, id: OptionId) -> Result<(), FlowError> {
        match self.slots.get_mut(index) {
            Some(slot) => {
                *slot = Some(id);
                Ok(())
            }
            None => Err(FlowError::QuestionOutOfRange {
                index,
                count: self.slots.len(),
            }),
        }
    }

    /// Answer at `index`, if any. Out-of-range reads are also `None`.
    pub fn get(&self, index: usize) -> Option<&OptionId> {
        self.slots.get(index).and_then(|slot| slot.as_ref())
    }

    pub fn answered(&self, index: usize) -> bool {
        self.get(index).is_some()
    }

    /// Number of answered slots.
    pub fn answered_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// True once every slot holds an answer.
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(|slot| slot.is_some())
    }

    /// Clear every slot, keeping the question count.
    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            *slot = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty_and_fills_one_slot_at_a_time() {
        let mut answers = AnswerSet::new(4);
        assert!(!answers.is_complete());
        assert_eq!(answers.answered_count(), 0);

        answers.select(0, OptionId::from("a")).unwrap();
        answers.select(2, OptionId::from("c")).unwrap();
        assert_eq!(answers.answered_count(), 2);
        assert_eq!(answers.get(0).unwrap().as_str(), "a");
        assert!(answers.get(1).is_none());
    }

    #[test]
    fn select_overwrites_previous_choice() {
        let mut answers = AnswerSet::new(2);
        answers.select(0, OptionId::from("a")).unwrap();
        answers.select(0, OptionId::from("b")).unwrap();
        assert_eq!(answers.get(0).unwrap().as_str(), "b");
    }

    #[test]
    fn select_out_of_range_is_refused() {
        let mut answers = AnswerSet::new(2);
        let err = answers.select(2, OptionId::from("a")).unwrap_err();
        assert!(matches!(
            err,
            FlowError::QuestionOutOfRange { index: 2, count: 2 }
        ));
    }

    #[test]
    fn clear_keeps_question_count() {
        let mut answers = AnswerSet::new(3);
        answers.select(1, OptionId::from("b")).unwrap();
        answers.clear();
        assert_eq!(answers.len(), 3);
        assert_eq!(answers.answered_count(), 0);
    }
}
