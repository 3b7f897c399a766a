use serde::{Deserialize, Serialize};

use crate::services::matching::cache::DEFAULT_CACHE_TTL;

/// Tunables for the matching pipeline.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct MatchConfig {
    /// Candidates shown on the results page.
    pub top_candidates: usize,
    /// Parties shown on the results page.
    pub top_groups: usize,
    /// Lifetime of the cached candidate snapshot.
    pub cache_ttl_secs: u64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            top_candidates: 6,
            top_groups: 5,
            cache_ttl_secs: DEFAULT_CACHE_TTL.as_secs(),
        }
    }
}
