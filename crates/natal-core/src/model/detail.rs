use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::model::Archetype;

/// Titled list of bullet items inside an archetype detail card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DetailSection {
    pub title: String,
    pub items: Vec<String>,
}

/// Static descriptive record for one archetype. Reference data for the
/// result view; plays no part in scoring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ArchetypeDetail {
    pub id: Archetype,
    pub name: String,
    pub subtitle: String,
    pub description: String,
    pub customization: String,
    pub suitability: String,
    /// What this archetype tends to value.
    pub values: Vec<String>,
    pub characteristics: Vec<String>,
    /// Suitable birth environments.
    pub environment: DetailSection,
    /// Matching medical-support model.
    pub medical: DetailSection,
}
