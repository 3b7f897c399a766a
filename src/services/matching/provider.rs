use std::future::Future;

use sqlx::SqlitePool;

use crate::database::candidate_repo;
use crate::services::matching::models::types::CandidateEntity;
use crate::types::errors::AffinityResult;

/// Source of every entity eligible for matching. Always returns the full
/// set; there is no filtering or pagination.
pub trait CandidateProvider: Send + Sync {
    fn list_candidates_with_tags(
        &self,
    ) -> impl Future<Output = AffinityResult<Vec<CandidateEntity>>> + Send;
}

/// Reads politicians and their tag assignments from SQLite.
#[derive(Debug, Clone)]
pub struct SqliteCandidateProvider {
    pool: SqlitePool,
}

impl SqliteCandidateProvider {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl CandidateProvider for SqliteCandidateProvider {
    async fn list_candidates_with_tags(&self) -> AffinityResult<Vec<CandidateEntity>> {
        let candidates = candidate_repo::list_candidates_with_tags(&self.pool).await?;
        Ok(candidates)
    }
}
