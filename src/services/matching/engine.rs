//! Affinity scoring: user score vector against every candidate.
//!
//! Per candidate the percentage is `earned / total_possible`, where
//! `total_possible = Σ |w|` over the user vector and `earned = Σ w` over the
//! user tags the candidate holds. `earned` keeps the sign of the user weight,
//! so holding a tag the user weighted negatively lowers the match. Results
//! are clamped to [0, 100] and rounded only when exposed.

use std::collections::HashMap;

use log::debug;

use crate::services::catalog::TagCatalog;
use crate::services::matching::categories::{to_percentage, CategoryProfile};
use crate::services::matching::models::types::{
    CandidateEntity, GroupResult, MatchOutcome, MatchResult, MatchedTag,
};
use crate::services::quiz::UserScoreVector;

#[derive(Debug, Clone, Default)]
pub struct AffinityEngine {
    catalog: TagCatalog,
}

impl AffinityEngine {
    pub fn new(catalog: TagCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &TagCatalog {
        &self.catalog
    }

    /// Score every candidate and aggregate groups. Nothing is truncated;
    /// see [`MatchOutcome::truncated`].
    pub fn compute_matches(
        &self,
        user: &UserScoreVector,
        candidates: &[CandidateEntity],
    ) -> MatchOutcome {
        let total_possible = user.total_abs_weight();
        let profile = CategoryProfile::build(user, &self.catalog);

        let unknown_tags = user
            .iter()
            .filter(|(tag_id, _)| !self.catalog.contains(tag_id))
            .count();
        if unknown_tags > 0 {
            debug!("[Affinity] {unknown_tags} user tag(s) missing from catalog, using defaults");
        }

        let mut ranked: Vec<MatchResult> = candidates
            .iter()
            .map(|candidate| self.score_candidate(user, total_possible, &profile, candidate))
            .collect();

        let groups = aggregate_groups(&ranked);

        // Stable: equal percentages keep candidate order.
        ranked.sort_by(|a, b| b.percentage.cmp(&a.percentage));

        debug!(
            "[Affinity] Scored {} candidates against {} user tags ({} groups, {} categories)",
            ranked.len(),
            user.len(),
            groups.len(),
            profile.categories().count()
        );

        MatchOutcome { ranked, groups }
    }

    fn score_candidate(
        &self,
        user: &UserScoreVector,
        total_possible: f64,
        profile: &CategoryProfile,
        candidate: &CandidateEntity,
    ) -> MatchResult {
        let mut earned = 0.0;
        let mut matched_tags: Vec<MatchedTag> = Vec::new();

        for (tag_id, weight) in user.iter() {
            if !candidate.has_tag(tag_id) {
                continue;
            }
            earned += weight;
            matched_tags.push(MatchedTag {
                tag_id: tag_id.to_string(),
                score: weight,
                reason_text: self.catalog.reason_for(tag_id).to_string(),
            });
        }

        // Stable over tag-id order, so equal scores stay alphabetical.
        matched_tags.sort_by(|a, b| b.score.total_cmp(&a.score));

        MatchResult {
            candidate_id: candidate.id.clone(),
            name: candidate.name.clone(),
            group: candidate.group.clone(),
            percentage: to_percentage(earned, total_possible),
            matched_tags,
            category_scores: profile.axes_for(user, candidate),
        }
    }
}

/// Mean percentage per group, ranked highest first. `results` must still be
/// in candidate order: ties keep the order in which groups first appear.
fn aggregate_groups(results: &[MatchResult]) -> Vec<GroupResult> {
    let mut order: Vec<&str> = Vec::new();
    let mut members: HashMap<&str, Vec<u8>> = HashMap::new();

    for result in results {
        let group = result.group.as_str();
        members
            .entry(group)
            .or_insert_with(|| {
                order.push(group);
                Vec::new()
            })
            .push(result.percentage);
    }

    let mut groups: Vec<GroupResult> = order
        .into_iter()
        .map(|group| {
            let scores = members.get(group).map(Vec::as_slice).unwrap_or_default();
            let sum: f64 = scores.iter().map(|p| f64::from(*p)).sum();
            let mean = if scores.is_empty() {
                0.0
            } else {
                sum / scores.len() as f64
            };
            GroupResult {
                group: group.to_string(),
                percentage: mean.round().clamp(0.0, 100.0) as u8,
                member_count: scores.len(),
            }
        })
        .collect();

    groups.sort_by(|a, b| b.percentage.cmp(&a.percentage));
    groups
}

#[cfg(test)]
#[path = "tests/engine_tests.rs"]
mod tests;
