//! Single-slot, time-bounded memoization of the candidate provider.
//!
//! The candidate set changes slowly but is read on every match request, so
//! one snapshot is kept for `ttl`. Concurrent misses are not de-duplicated:
//! two callers that both see a stale slot both fetch. The slot mutex is
//! never held across the fetch, and a finished fetch only publishes when it
//! started after the snapshot currently stored, so a slow fetch cannot
//! replace a fresher one. Fetch errors propagate; a stale snapshot is never
//! served as a fallback.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use log::{debug, info, warn};

use crate::services::matching::models::types::CandidateEntity;
use crate::services::matching::provider::CandidateProvider;
use crate::types::errors::AffinityResult;

/// Reference TTL for the candidate snapshot.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(5 * 60);

/// Time source for cache expiry.
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

struct Snapshot {
    candidates: Arc<Vec<CandidateEntity>>,
    /// When the fetch that produced this snapshot began.
    started_at: Instant,
    /// When it completed; expiry is measured from here.
    fetched_at: Instant,
}

pub struct CandidateCache<P, C = SystemClock> {
    provider: P,
    clock: C,
    ttl: Duration,
    slot: Mutex<Option<Snapshot>>,
}

impl<P: CandidateProvider> CandidateCache<P, SystemClock> {
    pub fn new(provider: P, ttl: Duration) -> Self {
        Self::with_clock(provider, SystemClock, ttl)
    }
}

impl<P: CandidateProvider, C: Clock> CandidateCache<P, C> {
    pub fn with_clock(provider: P, clock: C, ttl: Duration) -> Self {
        Self {
            provider,
            clock,
            ttl,
            slot: Mutex::new(None),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Cached snapshot if younger than the TTL, otherwise a fresh fetch.
    pub async fn get_candidates(&self) -> AffinityResult<Arc<Vec<CandidateEntity>>> {
        if let Some(candidates) = self.fresh_snapshot() {
            debug!("[CandidateCache] Hit ({} candidates)", candidates.len());
            return Ok(candidates);
        }

        let started_at = self.clock.now();
        let candidates = Arc::new(self.provider.list_candidates_with_tags().await?);
        let fetched_at = self.clock.now();

        info!(
            "[CandidateCache] Fetched {} candidates in {:?}",
            candidates.len(),
            fetched_at.saturating_duration_since(started_at)
        );

        self.publish(Snapshot {
            candidates: Arc::clone(&candidates),
            started_at,
            fetched_at,
        });

        Ok(candidates)
    }

    fn fresh_snapshot(&self) -> Option<Arc<Vec<CandidateEntity>>> {
        let now = self.clock.now();
        let slot = self.lock_slot();
        slot.as_ref()
            .filter(|snapshot| now.saturating_duration_since(snapshot.fetched_at) < self.ttl)
            .map(|snapshot| Arc::clone(&snapshot.candidates))
    }

    fn publish(&self, snapshot: Snapshot) {
        let mut slot = self.lock_slot();
        match slot.as_ref() {
            Some(current) if current.started_at > snapshot.started_at => {
                warn!("[CandidateCache] Discarding fetch that started before the cached snapshot");
            }
            _ => *slot = Some(snapshot),
        }
    }

    fn lock_slot(&self) -> MutexGuard<'_, Option<Snapshot>> {
        // The slot is always left consistent, so a poisoned lock is still usable.
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
#[path = "tests/cache_tests.rs"]
mod tests;
