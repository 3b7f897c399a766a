//! Presentation helpers derived from match results.

use crate::services::matching::models::types::{CategoryScore, MatchStrength};

pub const STRONG_THRESHOLD: u8 = 75;
pub const MODERATE_THRESHOLD: u8 = 50;

/// Default number of categories returned by [`dominant_categories`].
pub const DOMINANT_CATEGORY_COUNT: usize = 3;

pub fn match_strength(percentage: u8) -> MatchStrength {
    if percentage >= STRONG_THRESHOLD {
        MatchStrength::Strong
    } else if percentage >= MODERATE_THRESHOLD {
        MatchStrength::Moderate
    } else {
        MatchStrength::Weak
    }
}

/// Labels of the `n` categories where the candidate scores highest,
/// ignoring categories with a zero candidate axis.
pub fn dominant_categories(category_scores: &[CategoryScore], n: usize) -> Vec<String> {
    let mut scored: Vec<&CategoryScore> = category_scores
        .iter()
        .filter(|score| score.candidate_axis > 0)
        .collect();

    scored.sort_by(|a, b| b.candidate_axis.cmp(&a.candidate_axis));

    scored
        .into_iter()
        .take(n)
        .map(|score| score.category.clone())
        .collect()
}

#[cfg(test)]
#[path = "tests/insights_tests.rs"]
mod tests;
