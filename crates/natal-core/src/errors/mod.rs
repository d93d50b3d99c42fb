pub mod catalog_error;
pub mod export_error;
pub mod flow_error;
pub mod scoring_error;

pub use catalog_error::CatalogError;
pub use export_error::ExportError;
pub use flow_error::FlowError;
pub use scoring_error::ScoringError;

/// Umbrella error for the natal workspace.
#[derive(Debug, thiserror::Error)]
pub enum NatalError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Scoring(#[from] ScoringError),

    #[error(transparent)]
    Flow(#[from] FlowError),

    #[error(transparent)]
    Export(#[from] ExportError),
}

/// Result alias used across the workspace.
pub type NatalResult<T> = Result<T, NatalError>;
