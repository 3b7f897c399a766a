use std::collections::HashMap;

use crate::services::catalog::models::Tag;

/// Category used for tag ids missing from the catalog.
pub const DEFAULT_CATEGORY: &str = "Geral";

/// Justification used for tag ids missing from the catalog.
pub const GENERIC_REASON: &str = "Posicionamento alinhado com as suas respostas.";

/// Immutable `tag id → Tag` lookup built once from reference data.
///
/// Lookups never fail: unknown ids resolve to [`DEFAULT_CATEGORY`] and
/// [`GENERIC_REASON`] so that catalog drift cannot break a matching pass.
#[derive(Debug, Clone, Default)]
pub struct TagCatalog {
    tags: HashMap<String, Tag>,
}

impl TagCatalog {
    pub fn new(tags: impl IntoIterator<Item = Tag>) -> Self {
        Self {
            tags: tags.into_iter().map(|tag| (tag.id.clone(), tag)).collect(),
        }
    }

    pub fn get(&self, tag_id: &str) -> Option<&Tag> {
        self.tags.get(tag_id)
    }

    pub fn contains(&self, tag_id: &str) -> bool {
        self.tags.contains_key(tag_id)
    }

    pub fn category_of(&self, tag_id: &str) -> &str {
        self.tags
            .get(tag_id)
            .map(|tag| tag.category.as_str())
            .unwrap_or(DEFAULT_CATEGORY)
    }

    pub fn reason_for(&self, tag_id: &str) -> &str {
        self.tags
            .get(tag_id)
            .map(|tag| tag.justification.reason_text.as_str())
            .unwrap_or(GENERIC_REASON)
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
#[path = "tests/tag_catalog_tests.rs"]
mod tests;
