use std::time::Duration;

use log::info;
use serde::Serialize;

use crate::services::catalog::models::Archetype;
use crate::services::catalog::ReferenceData;
use crate::services::config::MatchConfig;
use crate::services::matching::archetypes::ArchetypeClassifier;
use crate::services::matching::cache::{CandidateCache, Clock, SystemClock};
use crate::services::matching::engine::AffinityEngine;
use crate::services::matching::models::types::{CandidateEntity, MatchOutcome};
use crate::services::matching::provider::CandidateProvider;
use crate::services::quiz::UserScoreVector;
use crate::types::errors::AffinityResult;

/// Everything the results page needs for one quiz-taker.
#[derive(Debug, Clone, Serialize)]
pub struct QuizReport {
    pub archetype: Archetype,
    /// Top-N candidates and groups.
    pub outcome: MatchOutcome,
}

/// Matching pipeline for the presentation layer: candidate cache, affinity
/// engine and archetype classifier, constructed once per process.
pub struct MatchService<P, C = SystemClock> {
    engine: AffinityEngine,
    classifier: ArchetypeClassifier,
    cache: CandidateCache<P, C>,
    config: MatchConfig,
}

impl<P: CandidateProvider> MatchService<P, SystemClock> {
    pub fn new(reference: &ReferenceData, provider: P, config: MatchConfig) -> AffinityResult<Self> {
        Self::with_clock(reference, provider, SystemClock, config)
    }
}

impl<P: CandidateProvider, C: Clock> MatchService<P, C> {
    pub fn with_clock(
        reference: &ReferenceData,
        provider: P,
        clock: C,
        config: MatchConfig,
    ) -> AffinityResult<Self> {
        let classifier = ArchetypeClassifier::new(reference.archetypes.clone())?;
        let engine = AffinityEngine::new(reference.catalog());
        let cache = CandidateCache::with_clock(
            provider,
            clock,
            Duration::from_secs(config.cache_ttl_secs),
        );

        info!(
            "[MatchService] Ready: {} tags, {} archetypes, cache TTL {}s",
            engine.catalog().len(),
            classifier.archetypes().len(),
            config.cache_ttl_secs
        );

        Ok(Self {
            engine,
            classifier,
            cache,
            config,
        })
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    pub fn engine(&self) -> &AffinityEngine {
        &self.engine
    }

    pub fn classifier(&self) -> &ArchetypeClassifier {
        &self.classifier
    }

    /// Full, untruncated ranking. Uses `candidates` when given, otherwise
    /// the cached provider snapshot.
    pub async fn compute_matches(
        &self,
        user: &UserScoreVector,
        candidates: Option<&[CandidateEntity]>,
    ) -> AffinityResult<MatchOutcome> {
        match candidates {
            Some(candidates) => Ok(self.engine.compute_matches(user, candidates)),
            None => {
                let snapshot = self.cache.get_candidates().await?;
                Ok(self.engine.compute_matches(user, &snapshot))
            }
        }
    }

    pub fn classify(&self, user: &UserScoreVector) -> &Archetype {
        self.classifier.classify(user)
    }

    /// Archetype plus the configured top-N candidates and groups.
    pub async fn report(&self, user: &UserScoreVector) -> AffinityResult<QuizReport> {
        let outcome = self
            .compute_matches(user, None)
            .await?
            .truncated(self.config.top_candidates, self.config.top_groups);

        Ok(QuizReport {
            archetype: self.classify(user).clone(),
            outcome,
        })
    }
}

#[cfg(test)]
#[path = "tests/service_tests.rs"]
mod tests;
