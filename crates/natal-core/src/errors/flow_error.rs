/// Flow controller errors.
#[derive(Debug, thiserror::Error)]
pub enum FlowError {
    #[error("question index {index} out of range (catalog has {count} questions)")]
    QuestionOutOfRange { index: usize, count: usize },

    #[error("option '{id}' does not exist on question {index}")]
    UnknownOption { index: usize, id: String },

    #[error("session already finished; restart before selecting again")]
    ResultShown,
}
