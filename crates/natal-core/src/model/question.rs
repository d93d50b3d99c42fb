use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::model::WeightMap;

/// Identifier of an answer option, unique within its question.
///
/// The reference catalog uses `"a"/"b"/"c"` but nothing may assume that.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(transparent)]
#[ts(export)]
pub struct OptionId(String);

impl OptionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for OptionId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// One selectable answer to a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QuestionOption {
    pub id: OptionId,
    /// Display copy shown on the option button.
    pub text: String,
    /// Display icon (emoji in the reference catalog).
    pub icon: String,
    /// How strongly this option points at each archetype.
    pub weights: WeightMap,
}

/// A single diagnostic question with its ordered options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Question {
    /// 1-based position in the questionnaire.
    pub step: u32,
    /// Prompt shown above the options.
    pub prompt: String,
    pub options: Vec<QuestionOption>,
}

impl Question {
    /// Look up an option by id. `None` for ids not on this question.
    pub fn option(&self, id: &OptionId) -> Option<&QuestionOption> {
        self.options.iter().find(|opt| &opt.id == id)
    }
}
