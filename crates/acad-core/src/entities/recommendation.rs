use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::Priority;

/// Advisory study suggestion for one topic. Never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StudyRecommendation {
    pub topic_id: String,
    pub suggestion: String,
    pub priority: Priority,
}
