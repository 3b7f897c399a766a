use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Signed accumulated weight per tag id for one quiz session.
///
/// Ordered by tag id so every pass over the vector is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserScoreVector {
    weights: BTreeMap<String, f64>,
}

impl UserScoreVector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Weight for `tag_id`, 0 when the tag was never touched.
    pub fn get(&self, tag_id: &str) -> f64 {
        self.weights.get(tag_id).copied().unwrap_or(0.0)
    }

    pub fn add(&mut self, tag_id: &str, weight: f64) {
        *self.weights.entry(tag_id.to_string()).or_insert(0.0) += weight;
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.weights.iter().map(|(tag, weight)| (tag.as_str(), *weight))
    }

    /// `Σ |weight|`, the denominator of every match percentage.
    pub fn total_abs_weight(&self) -> f64 {
        self.weights.values().map(|weight| weight.abs()).sum()
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for UserScoreVector {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        let mut vector = Self::new();
        for (tag, weight) in iter {
            *vector.weights.entry(tag.into()).or_insert(0.0) += weight;
        }
        vector
    }
}
