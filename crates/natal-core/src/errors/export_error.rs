/// Image-export collaborator errors. Always recoverable: export failure is
/// reported to the user and never touches the computed result.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("rendering failed: {reason}")]
    RenderFailed { reason: String },

    #[error("export cancelled by navigation")]
    Cancelled,

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
