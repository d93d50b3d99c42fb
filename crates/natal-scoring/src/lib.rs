//! # natal-scoring
//!
//! The scoring engine: maps a completed answer set to a diagnostic result.
//!
//! ## Pipeline
//! 1. **Accumulate** — sum each chosen option's per-archetype weights;
//!    record a raw match entry per valid answer
//! 2. **Normalize** — each archetype total over `questions × 100`, scaled
//!    to 0–100 (independent match strengths, not a distribution)
//! 3. **Derive values** — autonomy/safety/experience shares of the summed
//!    scores, corrected to total exactly 100
//!
//! Pure and deterministic: the same answers against the same questions
//! always produce bit-identical output.

pub mod engine;
pub mod formula;

pub use engine::ScoringEngine;
pub use formula::ScoreBreakdown;
