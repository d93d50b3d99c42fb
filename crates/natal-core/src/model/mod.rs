pub mod answers;
pub mod archetype;
pub mod detail;
pub mod question;
pub mod result;
pub mod weight;

pub use answers::AnswerSet;
pub use archetype::Archetype;
pub use detail::{ArchetypeDetail, DetailSection};
pub use question::{OptionId, Question, QuestionOption};
pub use result::{ArchetypeScores, DiagnosticResult, ItemMatch, ValueChannel, ValuesTriple};
pub use weight::{MatchBand, Weight, WeightMap};
