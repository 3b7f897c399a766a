//! Domain types for the affinity matcher.
//!
//! Contains: CandidateEntity, MatchedTag, CategoryScore, MatchResult,
//! GroupResult, MatchOutcome, MatchStrength.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// A politician (or similar) with its plain, unweighted tag assignments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateEntity {
    pub id: String,
    pub name: String,
    /// Party label used for group aggregation.
    pub group: String,
    pub tags: BTreeSet<String>,
}

impl CandidateEntity {
    pub fn has_tag(&self, tag_id: &str) -> bool {
        self.tags.contains(tag_id)
    }
}

/// A user tag the candidate also holds, with the vote that justifies it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchedTag {
    pub tag_id: String,
    /// The user's signed weight for this tag.
    pub score: f64,
    pub reason_text: String,
}

/// One radar axis: user emphasis (always 100) against candidate alignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryScore {
    pub category: String,
    pub user_axis: u8,
    pub candidate_axis: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub candidate_id: String,
    pub name: String,
    pub group: String,
    /// Rounded, within [0, 100].
    pub percentage: u8,
    /// Sorted by score, highest first.
    pub matched_tags: Vec<MatchedTag>,
    /// One entry per category present in the user vector.
    pub category_scores: Vec<CategoryScore>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupResult {
    pub group: String,
    /// Rounded mean of the members' percentages.
    pub percentage: u8,
    pub member_count: usize,
}

/// Output of one matching pass. Both lists are sorted by percentage,
/// highest first, keeping input order among equals.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchOutcome {
    pub ranked: Vec<MatchResult>,
    pub groups: Vec<GroupResult>,
}

impl MatchOutcome {
    /// Keep only the best `top_candidates` results and `top_groups` groups.
    pub fn truncated(mut self, top_candidates: usize, top_groups: usize) -> Self {
        self.ranked.truncate(top_candidates);
        self.groups.truncate(top_groups);
        self
    }

    pub fn best(&self) -> Option<&MatchResult> {
        self.ranked.first()
    }
}

/// Qualitative label for a match percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStrength {
    Strong,
    Moderate,
    Weak,
}

impl std::fmt::Display for MatchStrength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchStrength::Strong => write!(f, "strong"),
            MatchStrength::Moderate => write!(f, "moderate"),
            MatchStrength::Weak => write!(f, "weak"),
        }
    }
}
