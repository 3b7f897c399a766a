//! Archetype classification.
//!
//! Each archetype scores `Σ user[tag]` over its pattern. The strictly highest
//! score wins; on ties the archetype declared first wins, so an empty or
//! all-zero vector always maps to the first archetype.

use crate::services::catalog::models::Archetype;
use crate::services::quiz::UserScoreVector;
use crate::types::errors::{AffinityError, AffinityResult};

#[derive(Debug, Clone)]
pub struct ArchetypeClassifier {
    /// Declaration order is the tie-break order.
    archetypes: Vec<Archetype>,
}

impl ArchetypeClassifier {
    pub fn new(archetypes: Vec<Archetype>) -> AffinityResult<Self> {
        if archetypes.is_empty() {
            return Err(AffinityError::InvalidReferenceData(
                "classifier needs at least one archetype".to_string(),
            ));
        }
        Ok(Self { archetypes })
    }

    pub fn archetypes(&self) -> &[Archetype] {
        &self.archetypes
    }

    /// Score of every archetype, in declaration order.
    pub fn scores<'a>(&'a self, user: &UserScoreVector) -> Vec<(&'a Archetype, f64)> {
        self.archetypes
            .iter()
            .map(|archetype| (archetype, pattern_score(archetype, user)))
            .collect()
    }

    pub fn classify(&self, user: &UserScoreVector) -> &Archetype {
        let mut best = &self.archetypes[0];
        let mut best_score = pattern_score(best, user);

        for archetype in &self.archetypes[1..] {
            let score = pattern_score(archetype, user);
            if score > best_score {
                best = archetype;
                best_score = score;
            }
        }

        best
    }
}

fn pattern_score(archetype: &Archetype, user: &UserScoreVector) -> f64 {
    archetype.pattern.iter().map(|tag_id| user.get(tag_id)).sum()
}

#[cfg(test)]
#[path = "tests/archetypes_tests.rs"]
mod tests;
