/// Catalog loading and schema validation errors.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog defines no questions")]
    EmptyCatalog,

    #[error("question at step {step} has no options")]
    NoOptions { step: u32 },

    #[error("duplicate option id '{id}' within step {step}")]
    DuplicateOptionId { step: u32, id: String },

    #[error("non-sequential step: expected {expected}, found {found}")]
    NonSequentialStep { expected: u32, found: u32 },

    #[error("unknown archetype label '{label}'")]
    UnknownArchetype { label: String },

    #[error("no detail record for archetype '{archetype}'")]
    MissingDetail { archetype: String },

    #[error("catalog parse failed: {0}")]
    Parse(#[from] toml::de::Error),
}
