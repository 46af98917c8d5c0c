//! CLI response types returned as JSON by `acad` commands.
//!
//! These structs define the shape of JSON output for commands like
//! `acad dashboard`, `acad paper list`, and `acad analysis summary`.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::analysis::{AnalysisResult, StatusTally, focus_topic, percentage_of, tally};
use crate::entities::{ExamPaper, Subject};

/// One subject card on the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SubjectOverview {
    pub id: String,
    pub name: String,
    pub topic_count: usize,
    pub paper_count: usize,
}

/// Response from `acad dashboard`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub subject_count: usize,
    pub paper_count: usize,
    pub question_count: usize,
    pub subjects: Vec<SubjectOverview>,
}

impl DashboardStats {
    #[must_use]
    pub fn collect(subjects: &[Subject], papers: &[ExamPaper]) -> Self {
        let overviews = subjects
            .iter()
            .map(|subject| SubjectOverview {
                id: subject.id.clone(),
                name: subject.name.clone(),
                topic_count: subject.syllabus.len(),
                paper_count: papers
                    .iter()
                    .filter(|paper| paper.subject_id == subject.id)
                    .count(),
            })
            .collect();

        Self {
            subject_count: subjects.len(),
            paper_count: papers.len(),
            question_count: papers.iter().map(|paper| paper.questions.len()).sum(),
            subjects: overviews,
        }
    }
}

/// A row of `acad paper list`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaperSummary {
    pub id: String,
    pub subject_id: String,
    /// `None` when the paper references a subject that no longer exists.
    pub subject_name: Option<String>,
    pub name: String,
    pub date: DateTime<Utc>,
    pub scored: f64,
    pub total: f64,
    pub percentage: f64,
}

impl PaperSummary {
    #[must_use]
    pub fn from_paper(paper: &ExamPaper, subjects: &[Subject]) -> Self {
        let (scored, total) = paper.totals();
        Self {
            id: paper.id.clone(),
            subject_id: paper.subject_id.clone(),
            subject_name: subjects
                .iter()
                .find(|subject| subject.id == paper.subject_id)
                .map(|subject| subject.name.clone()),
            name: paper.name.clone(),
            date: paper.date,
            scored,
            total,
            percentage: percentage_of(scored, total),
        }
    }
}

/// Response from `acad analysis summary`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FocusSummary {
    pub subject_id: String,
    pub tally: StatusTally,
    /// First weak topic in syllabus order, if any.
    pub focus: Option<AnalysisResult>,
}

impl FocusSummary {
    #[must_use]
    pub fn from_results(subject_id: &str, results: &[AnalysisResult]) -> Self {
        Self {
            subject_id: subject_id.to_string(),
            tally: tally(results),
            focus: focus_topic(results).cloned(),
        }
    }
}

/// Response from `acad subject delete`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SubjectDeleteResponse {
    pub subject_id: String,
    pub papers_removed: usize,
}
