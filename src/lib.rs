//! Civic affinity matching: quiz scoring, politician/party matching and
//! archetype classification.
//!
//! Typical flow: [`services::quiz::QuizSession`] collects answers into a
//! [`services::quiz::UserScoreVector`], which [`services::matching::MatchService`]
//! scores against every candidate served by its cache.

pub mod database;
pub mod services;
pub mod types;
#[cfg(test)]
pub mod test_utils;

pub use services::catalog::{ReferenceData, TagCatalog};
pub use services::config::MatchConfig;
pub use services::matching::{
    dominant_categories, match_strength, AffinityEngine, ArchetypeClassifier, CandidateCache,
    CandidateEntity, CandidateProvider, MatchOutcome, MatchService, SqliteCandidateProvider,
};
pub use services::quiz::{accumulate, QuizSession, UserScoreVector};
pub use types::errors::{AffinityError, AffinityResult};
