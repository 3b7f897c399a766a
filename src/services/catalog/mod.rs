//! Reference data for the matcher: tag catalog, quiz questions and archetypes.
//!
//! Loaded once at startup and never mutated afterwards.
pub mod models;
pub mod reference_data;
pub mod tag_catalog;

pub use models::{Archetype, Justification, QuizOption, QuizQuestion, Tag, TagEffect, TriggerChoice};
pub use reference_data::ReferenceData;
pub use tag_catalog::{TagCatalog, DEFAULT_CATEGORY, GENERIC_REASON};
