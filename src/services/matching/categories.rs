//! Per-category normalization behind the radar chart.

use std::collections::BTreeMap;

use crate::services::catalog::TagCatalog;
use crate::services::matching::models::types::{CandidateEntity, CategoryScore};
use crate::services::quiz::UserScoreVector;

/// The user axis is the reference every candidate axis is measured against.
pub const USER_AXIS: u8 = 100;

const PERCENT_MIN: f64 = 0.0;
const PERCENT_MAX: f64 = 100.0;

/// `numerator / denominator` as a rounded percentage clamped to [0, 100].
/// A non-positive denominator yields 0.
pub fn to_percentage(numerator: f64, denominator: f64) -> u8 {
    if denominator <= 0.0 {
        return 0;
    }

    let percent = (numerator / denominator * 100.0).clamp(PERCENT_MIN, PERCENT_MAX);
    if percent.is_nan() {
        return 0;
    }
    percent.round() as u8
}

/// User-side category totals (`Σ |weight|` per category), built once per
/// matching pass and reused for every candidate.
#[derive(Debug, Clone, Default)]
pub struct CategoryProfile {
    /// category → (tag ids in this category, Σ |weight|)
    totals: BTreeMap<String, (Vec<String>, f64)>,
}

impl CategoryProfile {
    pub fn build(user: &UserScoreVector, catalog: &TagCatalog) -> Self {
        let mut totals: BTreeMap<String, (Vec<String>, f64)> = BTreeMap::new();

        for (tag_id, weight) in user.iter() {
            let entry = totals
                .entry(catalog.category_of(tag_id).to_string())
                .or_default();
            entry.0.push(tag_id.to_string());
            entry.1 += weight.abs();
        }

        Self { totals }
    }

    pub fn user_total(&self, category: &str) -> f64 {
        self.totals.get(category).map(|(_, total)| *total).unwrap_or(0.0)
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.totals.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    /// One axis per user category, ordered by category name. Candidate side
    /// is the signed sum of the user weights the candidate holds.
    pub fn axes_for(&self, user: &UserScoreVector, candidate: &CandidateEntity) -> Vec<CategoryScore> {
        self.totals
            .iter()
            .map(|(category, (tag_ids, user_total))| {
                let candidate_total: f64 = tag_ids
                    .iter()
                    .filter(|tag_id| candidate.has_tag(tag_id))
                    .map(|tag_id| user.get(tag_id))
                    .sum();

                CategoryScore {
                    category: category.clone(),
                    user_axis: USER_AXIS,
                    candidate_axis: to_percentage(candidate_total, *user_total),
                }
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "tests/categories_tests.rs"]
mod tests;
