use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A question extracted from raw paper text and mapped to the syllabus.
///
/// Produced by the AI collaborator; has no id and no obtained marks yet.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MappedQuestion {
    pub text: String,
    pub allotted_marks: f64,
    #[serde(default)]
    pub mapped_topic_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mapped_subtopic_id: Option<String>,
}
