use tracing::debug;

use natal_catalog::Catalog;
use natal_core::errors::{FlowError, NatalResult};
use natal_core::model::{AnswerSet, DiagnosticResult, OptionId, Question};
use natal_scoring::ScoringEngine;

/// Outcome of an [`DiagnosticFlow::advance`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Nothing happened: the current question is unanswered, or the session
    /// is already showing its result.
    Blocked,
    /// Moved to the next question.
    Moved,
    /// The last question was answered; the result is now computed and shown.
    Completed,
}

/// The diagnostic session state machine.
///
/// States: questioning (current index bounded to the catalog) and terminal
/// "result shown". Re-selecting an answered question overwrites; going back
/// never clears; the only way out of the terminal state is [`restart`].
///
/// [`restart`]: DiagnosticFlow::restart
pub struct DiagnosticFlow {
    catalog: Catalog,
    engine: ScoringEngine,
    current: usize,
    answers: AnswerSet,
    result: Option<DiagnosticResult>,
}

impl DiagnosticFlow {
    /// Start a fresh session over a catalog with the default engine.
    pub fn new(catalog: Catalog) -> Self {
        Self::with_engine(catalog, ScoringEngine::new())
    }

    pub fn with_engine(catalog: Catalog, engine: ScoringEngine) -> Self {
        let answers = AnswerSet::new(catalog.len());
        Self {
            catalog,
            engine,
            current: 0,
            answers,
            result: None,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// 0-based index of the question currently on screen.
    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.catalog.question(self.current)
    }

    /// The stored answer for a question, if any.
    pub fn answer(&self, index: usize) -> Option<&OptionId> {
        self.answers.get(index)
    }

    pub fn is_showing_result(&self) -> bool {
        self.result.is_some()
    }

    /// The computed result, present only in the terminal state.
    pub fn result(&self) -> Option<&DiagnosticResult> {
        self.result.as_ref()
    }

    /// (answered, total) for the progress display.
    pub fn progress(&self) -> (usize, usize) {
        (self.answers.answered_count(), self.answers.len())
    }

    /// Set or overwrite the answer at `index`. Does not advance. Refused in
    /// the terminal state and for ids not offered by that question.
    pub fn select_option(&mut self, index: usize, id: OptionId) -> NatalResult<()> {
        if self.result.is_some() {
            return Err(FlowError::ResultShown.into());
        }
        let question =
            self.catalog
                .question(index)
                .ok_or_else(|| FlowError::QuestionOutOfRange {
                    index,
                    count: self.catalog.len(),
                })?;
        if question.option(&id).is_none() {
            return Err(FlowError::UnknownOption {
                index,
                id: id.as_str().to_string(),
            }
            .into());
        }
        debug!(index, id = %id, "option selected");
        self.answers.select(index, id)?;
        Ok(())
    }

    /// Move forward. Blocked while the current question is unanswered; on
    /// the last question, computes the result and enters the terminal state.
    pub fn advance(&mut self) -> NatalResult<Advance> {
        if self.result.is_some() || !self.answers.answered(self.current) {
            return Ok(Advance::Blocked);
        }
        if self.current + 1 == self.catalog.len() {
            let result = self.engine.score(&self.answers, self.catalog.questions())?;
            self.result = Some(result);
            debug!("session complete, showing result");
            return Ok(Advance::Completed);
        }
        self.current += 1;
        debug!(index = self.current, "advanced");
        Ok(Advance::Moved)
    }

    /// Step back one question, keeping every stored answer. No-op at the
    /// first question and in the terminal state.
    pub fn retreat(&mut self) -> bool {
        if self.result.is_some() || self.current == 0 {
            return false;
        }
        self.current -= 1;
        debug!(index = self.current, "retreated");
        true
    }

    /// Back to the initial state: index 0, empty answers, no result.
    pub fn restart(&mut self) {
        self.current = 0;
        self.answers.clear();
        self.result = None;
        debug!("session restarted");
    }
}
