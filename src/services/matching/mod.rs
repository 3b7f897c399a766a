//! Affinity matcher: scores a user's quiz vector against every politician,
//! aggregates parties and picks the user's archetype.
pub mod archetypes;
pub mod cache;
pub mod categories;
pub mod engine;
pub mod insights;
pub mod models;
pub mod provider;
pub mod service;

pub use archetypes::ArchetypeClassifier;
pub use cache::{CandidateCache, Clock, SystemClock, DEFAULT_CACHE_TTL};
pub use engine::AffinityEngine;
pub use insights::{dominant_categories, match_strength, DOMINANT_CATEGORY_COUNT};
pub use models::types::{
    CandidateEntity, CategoryScore, GroupResult, MatchOutcome, MatchResult, MatchStrength,
    MatchedTag,
};
pub use provider::{CandidateProvider, SqliteCandidateProvider};
pub use service::{MatchService, QuizReport};
