use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::errors::CatalogError;

/// One of the three fixed classification outcomes.
///
/// The set is closed: the scoring formula, the values derivation, and the
/// result view all assume exactly these three. Extending it is a schema
/// change, not a data change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum Archetype {
    /// Wants the lead on their own birth; natural pace, minimal intervention.
    NaturalAutonomy,
    /// Natural process and medical reassurance in partnership.
    Balanced,
    /// Medical backing as the anchor of safety.
    SolidSupport,
}

impl Archetype {
    /// All archetypes in canonical order. Iteration and tie-breaking both
    /// follow this order.
    pub const ALL: [Archetype; 3] = [
        Archetype::NaturalAutonomy,
        Archetype::Balanced,
        Archetype::SolidSupport,
    ];

    /// Kebab-case identifier, matching the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Archetype::NaturalAutonomy => "natural-autonomy",
            Archetype::Balanced => "balanced",
            Archetype::SolidSupport => "solid-support",
        }
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Archetype {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "natural-autonomy" => Ok(Archetype::NaturalAutonomy),
            "balanced" => Ok(Archetype::Balanced),
            "solid-support" => Ok(Archetype::SolidSupport),
            other => Err(CatalogError::UnknownArchetype {
                label: other.to_string(),
            }),
        }
    }
}
