use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A graded question on a saved exam paper.
///
/// `mapped_topic_id` is empty when the question is unmapped. Marks are not
/// range-checked here; `obtained_marks > allotted_marks` is representable.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,
    pub text: String,
    pub allotted_marks: f64,
    pub obtained_marks: f64,
    #[serde(default)]
    pub mapped_topic_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mapped_subtopic_id: Option<String>,
}

impl Question {
    /// Whether the question references a syllabus topic.
    #[must_use]
    pub fn is_mapped(&self) -> bool {
        !self.mapped_topic_id.is_empty()
    }
}

/// A finalized exam paper belonging to exactly one subject.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExamPaper {
    pub id: String,
    pub subject_id: String,
    pub name: String,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub questions: Vec<Question>,
}

impl ExamPaper {
    /// Sum of obtained marks and sum of allotted marks, in that order.
    #[must_use]
    pub fn totals(&self) -> (f64, f64) {
        self.questions.iter().fold((0.0, 0.0), |(scored, total), q| {
            (scored + q.obtained_marks, total + q.allotted_marks)
        })
    }
}
