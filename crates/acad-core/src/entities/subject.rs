use std::collections::HashSet;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;
use crate::ids::{PREFIX_SUBTOPIC, PREFIX_TOPIC, gen_id};

/// Leaf label of a syllabus topic. Carries no marks of its own.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Subtopic {
    #[serde(default)]
    pub id: String,
    pub name: String,
}

/// Unit of aggregation. `id` is unique within its syllabus.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Topic {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub subtopics: Vec<Subtopic>,
}

/// A registered subject and its ordered syllabus.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Subject {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub syllabus: Vec<Topic>,
}

impl Subject {
    /// Look up a syllabus topic by id.
    #[must_use]
    pub fn topic(&self, topic_id: &str) -> Option<&Topic> {
        self.syllabus.iter().find(|topic| topic.id == topic_id)
    }
}

/// Make a syllabus safe to store: blank ids are filled with generated ids and
/// repeated topic ids are re-keyed, so topic ids are unique within the syllabus.
/// Topic order is preserved.
///
/// # Errors
///
/// Returns [`CoreError::Other`] if an id cannot be generated.
pub fn normalize_syllabus(topics: Vec<Topic>) -> Result<Vec<Topic>, CoreError> {
    let mut seen = HashSet::with_capacity(topics.len());
    let mut normalized = Vec::with_capacity(topics.len());

    for mut topic in topics {
        let trimmed = topic.id.trim();
        if trimmed.is_empty() || seen.contains(trimmed) {
            let fresh = gen_id(PREFIX_TOPIC)?;
            if !trimmed.is_empty() {
                tracing::warn!(duplicate = %trimmed, replacement = %fresh, "re-keyed duplicate topic id");
            }
            topic.id = fresh;
        } else {
            topic.id = trimmed.to_string();
        }
        seen.insert(topic.id.clone());

        for subtopic in &mut topic.subtopics {
            if subtopic.id.trim().is_empty() {
                subtopic.id = gen_id(PREFIX_SUBTOPIC)?;
            }
        }
        normalized.push(topic);
    }

    Ok(normalized)
}
