use std::collections::HashSet;
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::services::catalog::models::{Archetype, QuizQuestion, Tag};
use crate::services::catalog::tag_catalog::TagCatalog;
use crate::types::errors::{AffinityError, AffinityResult};

/// Bundled default data set, compiled into the binary.
const EMBEDDED_REFERENCE_DATA: &str = include_str!("../../../resources/reference_data.json");

/// Everything the matcher needs that is authored by hand: tags, the quiz and
/// the archetype list (in declaration order).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferenceData {
    pub tags: Vec<Tag>,
    pub questions: Vec<QuizQuestion>,
    pub archetypes: Vec<Archetype>,
}

impl ReferenceData {
    /// Parse and validate a JSON bundle.
    pub fn from_json(json: &str) -> AffinityResult<Self> {
        let data: ReferenceData = serde_json::from_str(json)?;
        data.validate()?;

        info!(
            "Loaded reference data: {} tags, {} questions, {} archetypes",
            data.tags.len(),
            data.questions.len(),
            data.archetypes.len()
        );
        Ok(data)
    }

    /// Read a JSON bundle from disk.
    pub fn load(path: &Path) -> AffinityResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|e| {
            AffinityError::Io(format!("Failed to read {}: {e}", path.display()))
        })?;
        Self::from_json(&json)
    }

    /// The data set shipped with the crate.
    pub fn embedded() -> AffinityResult<Self> {
        Self::from_json(EMBEDDED_REFERENCE_DATA)
    }

    pub fn catalog(&self) -> TagCatalog {
        TagCatalog::new(self.tags.iter().cloned())
    }

    /// Load-time checks for authoring mistakes. Every problem is reported,
    /// not only the first one.
    pub fn validate(&self) -> AffinityResult<()> {
        let mut problems: Vec<String> = Vec::new();

        let mut tag_ids: HashSet<&str> = HashSet::new();
        for tag in &self.tags {
            if tag.id.trim().is_empty() {
                problems.push("tag with empty id".to_string());
            } else if !tag_ids.insert(tag.id.as_str()) {
                problems.push(format!("duplicate tag id '{}'", tag.id));
            }
        }

        for question in &self.questions {
            if question.options.len() < 2 {
                problems.push(format!(
                    "question '{}' has {} option(s), expected at least 2",
                    question.id,
                    question.options.len()
                ));
            }

            for (index, option) in question.options.iter().enumerate() {
                if option.effects.is_empty() {
                    problems.push(format!(
                        "question '{}' option {index} affects no tag",
                        question.id
                    ));
                }

                for effect in &option.effects {
                    if !effect.weight.is_finite() || effect.weight <= 0.0 {
                        problems.push(format!(
                            "question '{}' option {index}: weight {} for '{}' must be finite and positive",
                            question.id, effect.weight, effect.tag_id
                        ));
                    }
                    if !tag_ids.contains(effect.tag_id.as_str()) {
                        problems.push(format!(
                            "question '{}' option {index} references unknown tag '{}'",
                            question.id, effect.tag_id
                        ));
                    }
                }
            }
        }

        if self.archetypes.is_empty() {
            problems.push("no archetypes defined".to_string());
        }

        let mut archetype_ids: HashSet<&str> = HashSet::new();
        for archetype in &self.archetypes {
            if !archetype_ids.insert(archetype.id.as_str()) {
                problems.push(format!("duplicate archetype id '{}'", archetype.id));
            }
            if archetype.pattern.is_empty() {
                problems.push(format!("archetype '{}' has an empty pattern", archetype.id));
            }
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(AffinityError::InvalidReferenceData(problems.join("; ")))
        }
    }
}

#[cfg(test)]
#[path = "tests/reference_data_tests.rs"]
mod tests;
