use std::collections::BTreeMap;

use crate::services::catalog::models::QuizOption;
use crate::services::quiz::score_vector::UserScoreVector;

/// Sum the tag effects of every chosen option into one score vector.
///
/// Partial answer sheets are fine. The result does not depend on answer
/// order: each tag's contributions are summed in ascending order, so float
/// rounding is the same for every permutation.
pub fn accumulate<'a>(answers: impl IntoIterator<Item = &'a QuizOption>) -> UserScoreVector {
    let mut contributions: BTreeMap<&'a str, Vec<f64>> = BTreeMap::new();

    for option in answers {
        for effect in &option.effects {
            contributions
                .entry(effect.tag_id.as_str())
                .or_default()
                .push(effect.weight);
        }
    }

    contributions
        .into_iter()
        .map(|(tag_id, mut weights)| {
            weights.sort_by(f64::total_cmp);
            (tag_id, weights.iter().sum::<f64>())
        })
        .collect()
}

#[cfg(test)]
#[path = "tests/accumulator_tests.rs"]
mod tests;
