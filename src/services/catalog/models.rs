//! Reference data types.
//!
//! Contains: TriggerChoice, Justification, Tag, TagEffect, QuizOption,
//! QuizQuestion, Archetype.

use serde::{Deserialize, Serialize};

/// How the politician voted on the justifying subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TriggerChoice {
    Agree,
    Disagree,
}

impl std::fmt::Display for TriggerChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TriggerChoice::Agree => write!(f, "AGREE"),
            TriggerChoice::Disagree => write!(f, "DISAGREE"),
        }
    }
}

/// The vote that earns a politician a tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Justification {
    pub trigger_choice: TriggerChoice,
    /// Bill or subject voted on.
    pub subject_title: String,
    /// Shown to the user next to a matched tag.
    pub reason_text: String,
}

/// Atomic political-position label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    /// Globally unique key, e.g. `"baixo-custo"`.
    pub id: String,
    pub name: String,
    /// Topic grouping, e.g. `"Economia"`.
    pub category: String,
    pub justification: Justification,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagEffect {
    pub tag_id: String,
    /// Strictly positive and finite (checked at load time).
    pub weight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizOption {
    pub label: String,
    pub effects: Vec<TagEffect>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub id: String,
    pub prompt: String,
    pub options: Vec<QuizOption>,
}

/// Descriptive persona assigned from the user's accumulated weights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Archetype {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Tags whose user weights are summed into this archetype's score.
    pub pattern: Vec<String>,
}
