//! # natal-core
//!
//! Foundation crate for the natal birth-style diagnostic.
//! Defines all types, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod model;

// Re-export the most commonly used types at the crate root.
pub use config::ScoringConfig;
pub use errors::{NatalError, NatalResult};
pub use model::{
    AnswerSet, Archetype, ArchetypeScores, DiagnosticResult, ItemMatch, MatchBand, OptionId,
    Question, ValueChannel, ValuesTriple, Weight, WeightMap,
};
