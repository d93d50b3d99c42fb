//! # natal-flow
//!
//! The session flow controller: an explicit state machine that walks the
//! user through the questionnaire one question at a time, collects answers,
//! and hands the completed answer set to the scoring engine.
//!
//! One flow instance is one interactive session. Transitions are handled to
//! completion before the next one arrives; nothing here is shared across
//! sessions. The only asynchronous collaborator is the best-effort image
//! export, which never touches flow state.

pub mod export;
pub mod flow;

pub use export::{ExportedImage, RenderedView, ViewExporter};
pub use flow::{Advance, DiagnosticFlow};
