/// Scoring engine errors. Only raised in strict mode — the default
/// permissive policy skips bad entries instead of failing.
#[derive(Debug, thiserror::Error)]
pub enum ScoringError {
    #[error("answer for question {question_index} references unknown option '{id}'")]
    UnknownOption { question_index: usize, id: String },

    #[error("question {question_index} has no answer")]
    Unanswered { question_index: usize },

    #[error("answer set covers {answers} questions but the catalog has {questions}")]
    LengthMismatch { answers: usize, questions: usize },
}
