use serde::{Deserialize, Serialize};

use natal_core::errors::CatalogError;
use natal_core::model::{Archetype, ArchetypeDetail, Question};

/// The full content catalog: ordered questions plus one detail record per
/// archetype. Immutable after construction; both constructors validate.
///
/// TOML layout:
///
/// ```toml
/// [[questions]]
/// step = 1
/// prompt = "..."
///
/// [[questions.options]]
/// id = "a"
/// text = "..."
/// icon = "🌿"
/// weights = { "natural-autonomy" = 80, balanced = 40, "solid-support" = 20 }
///
/// [[details]]
/// id = "natural-autonomy"
/// name = "..."
/// # ...
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    questions: Vec<Question>,
    details: Vec<ArchetypeDetail>,
}

impl Catalog {
    /// Build a catalog from parts, validating the schema.
    pub fn new(
        questions: Vec<Question>,
        details: Vec<ArchetypeDetail>,
    ) -> Result<Self, CatalogError> {
        let catalog = Self { questions, details };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Parse and validate a catalog from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = toml::from_str(text)?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Question at a 0-based index.
    pub fn question(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    /// Number of questions.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Detail card for an archetype. Always present in a validated catalog.
    pub fn detail(&self, archetype: Archetype) -> Option<&ArchetypeDetail> {
        self.details.iter().find(|d| d.id == archetype)
    }

    /// Schema validation: at least one question, every question has options,
    /// option ids unique within their question, steps 1-based and
    /// sequential, and a detail record for every archetype. Weight
    /// completeness is structural — `WeightMap` cannot be built with a
    /// missing archetype.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.questions.is_empty() {
            return Err(CatalogError::EmptyCatalog);
        }

        for (index, question) in self.questions.iter().enumerate() {
            let expected = index as u32 + 1;
            if question.step != expected {
                return Err(CatalogError::NonSequentialStep {
                    expected,
                    found: question.step,
                });
            }
            if question.options.is_empty() {
                return Err(CatalogError::NoOptions {
                    step: question.step,
                });
            }
            for (i, option) in question.options.iter().enumerate() {
                if question.options[..i].iter().any(|o| o.id == option.id) {
                    return Err(CatalogError::DuplicateOptionId {
                        step: question.step,
                        id: option.id.as_str().to_string(),
                    });
                }
            }
        }

        for archetype in Archetype::ALL {
            if !self.details.iter().any(|d| d.id == archetype) {
                return Err(CatalogError::MissingDetail {
                    archetype: archetype.as_str().to_string(),
                });
            }
        }

        Ok(())
    }
}
