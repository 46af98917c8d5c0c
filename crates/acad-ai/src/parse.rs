//! Lenient parsing of model output.
//!
//! The model is asked for a JSON array but nothing guarantees it. Text that
//! is not JSON, or JSON whose top level is not an array, yields an empty
//! result. Array elements are decoded one by one; elements that do not fit
//! the expected shape are dropped with a warning and valid siblings are kept.

use acad_core::entities::{MappedQuestion, StudyRecommendation, Topic, normalize_syllabus};
use acad_core::enums::Priority;
use acad_core::errors::CoreError;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Recommendation as the model emits it; `priority` is free text.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawRecommendation {
    topic_id: String,
    suggestion: String,
    #[serde(default)]
    priority: String,
}

/// Parse a syllabus, then fill missing ids and re-key duplicates.
///
/// # Errors
///
/// Returns [`CoreError`] only if id generation fails.
pub fn syllabus(text: &str) -> Result<Vec<Topic>, CoreError> {
    normalize_syllabus(elements(text, "topic"))
}

#[must_use]
pub fn mapped_questions(text: &str) -> Vec<MappedQuestion> {
    elements(text, "question")
}

/// Parse recommendations; unknown priority labels become `Medium`.
#[must_use]
pub fn recommendations(text: &str) -> Vec<StudyRecommendation> {
    elements::<RawRecommendation>(text, "recommendation")
        .into_iter()
        .map(|raw| StudyRecommendation {
            topic_id: raw.topic_id,
            suggestion: raw.suggestion,
            priority: Priority::parse_lenient(&raw.priority),
        })
        .collect()
}

fn elements<T: DeserializeOwned>(text: &str, kind: &str) -> Vec<T> {
    let value: Value = match serde_json::from_str(strip_code_fence(text)) {
        Ok(value) => value,
        Err(error) => {
            tracing::warn!(kind, %error, "model output is not valid JSON; using empty result");
            return Vec::new();
        }
    };
    let Value::Array(items) = value else {
        tracing::warn!(kind, "model output is not a JSON array; using empty result");
        return Vec::new();
    };

    let total = items.len();
    let parsed: Vec<T> = items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| match serde_json::from_value(item) {
            Ok(parsed) => Some(parsed),
            Err(error) => {
                tracing::warn!(kind, index, %error, "dropping malformed element");
                None
            }
        })
        .collect();
    tracing::debug!(kind, total, kept = parsed.len(), "parsed model output");
    parsed
}

/// Models occasionally wrap JSON in a Markdown code fence despite the
/// response MIME type.
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let body = rest.strip_prefix("json").unwrap_or(rest);
    body.strip_suffix("```").unwrap_or(body).trim()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn invalid_json_is_empty() {
        assert!(mapped_questions("not json at all").is_empty());
        assert!(recommendations("").is_empty());
        assert!(syllabus("[{").unwrap().is_empty());
    }

    #[test]
    fn non_array_top_level_is_empty() {
        assert!(mapped_questions(r#"{"text":"q","allottedMarks":1}"#).is_empty());
        assert!(recommendations("42").is_empty());
    }

    #[test]
    fn keeps_valid_siblings_of_malformed_elements() {
        let text = r#"[
            {"text": "Define velocity", "allottedMarks": 5, "mappedTopicId": "T1"},
            {"text": "Missing marks", "mappedTopicId": "T1"},
            "just a string",
            {"text": "Heat engines", "allottedMarks": 2.5, "mappedTopicId": "T2", "mappedSubtopicId": "T2.1"}
        ]"#;
        let questions = mapped_questions(text);
        assert_eq!(
            questions,
            vec![
                MappedQuestion {
                    text: "Define velocity".into(),
                    allotted_marks: 5.0,
                    mapped_topic_id: "T1".into(),
                    mapped_subtopic_id: None,
                },
                MappedQuestion {
                    text: "Heat engines".into(),
                    allotted_marks: 2.5,
                    mapped_topic_id: "T2".into(),
                    mapped_subtopic_id: Some("T2.1".into()),
                },
            ]
        );
    }

    #[test]
    fn unknown_priority_falls_back_to_medium() {
        let text = r#"[
            {"topicId": "T1", "suggestion": "Keep practising", "priority": "low"},
            {"topicId": "T2", "suggestion": "Revise thermo", "priority": "URGENT"},
            {"topicId": "T3", "suggestion": "No priority given"},
            {"suggestion": "no topic"}
        ]"#;
        let recs = recommendations(text);
        assert_eq!(recs.len(), 3);
        assert_eq!(recs[0].priority, Priority::Low);
        assert_eq!(recs[1].priority, Priority::Medium);
        assert_eq!(recs[2].priority, Priority::Medium);
    }

    #[test]
    fn syllabus_ids_are_filled_and_unique() {
        let text = r#"[
            {"id": "T1", "name": "Kinematics", "subtopics": [{"id": "", "name": "Vectors"}]},
            {"id": "T1", "name": "Dynamics", "subtopics": []},
            {"name": "Optics"},
            {"id": "T9"}
        ]"#;
        let topics = syllabus(text).unwrap();
        assert_eq!(topics.len(), 3);
        assert_eq!(topics[0].id, "T1");
        assert!(!topics[0].subtopics[0].id.is_empty());
        assert_ne!(topics[1].id, "T1");
        assert!(!topics[2].id.is_empty());
        assert_eq!(topics[2].name, "Optics");
    }

    #[test]
    fn strips_markdown_fence() {
        let text = "```json\n[{\"topicId\":\"T1\",\"suggestion\":\"s\",\"priority\":\"High\"}]\n```";
        assert_eq!(recommendations(text)[0].priority, Priority::High);
        assert_eq!(strip_code_fence("  []  "), "[]");
    }
}
