//! # natal-catalog
//!
//! The content catalog: the fixed questionnaire (questions, options,
//! per-archetype weights) and the descriptive detail card for each
//! archetype. Read-only reference data, validated at load time.
//!
//! The builtin catalog mirrors the reference questionnaire (4 questions,
//! 3 options each); a replacement catalog can be loaded from TOML. The
//! scoring engine takes the question count from whatever catalog it is
//! handed — nothing downstream assumes 4.

pub mod builtin;
pub mod catalog;

pub use builtin::builtin;
pub use catalog::Catalog;
