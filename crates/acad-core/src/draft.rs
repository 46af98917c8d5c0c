//! Draft paper staging.
//!
//! Questions extracted from a paper are staged in a [`DraftPaper`] where
//! obtained marks are entered. Only [`DraftPaper::finalize`] produces an
//! [`ExamPaper`]; saved papers are never edited in place.
//!
//! Mark entry rejects negative and non-finite values. Over-scoring
//! (`obtained > allotted`) is accepted, logged, and reported by
//! [`DraftPaper::over_scored`].

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{ExamPaper, MappedQuestion, Question};
use crate::errors::CoreError;
use crate::ids::{PREFIX_PAPER, PREFIX_QUESTION, gen_id};

/// A staged question whose marks are still editable.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DraftQuestion {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default)]
    pub allotted_marks: f64,
    #[serde(default)]
    pub obtained_marks: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mapped_topic_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mapped_subtopic_id: Option<String>,
}

/// Allotted marks read from the model are staged like typed ones: negative or
/// non-finite values become `0` so they can be corrected with `set_allotted`.
impl From<MappedQuestion> for DraftQuestion {
    fn from(mapped: MappedQuestion) -> Self {
        let allotted_marks = if validate_marks(mapped.allotted_marks, "allotted").is_ok() {
            mapped.allotted_marks
        } else {
            tracing::warn!(
                allotted = mapped.allotted_marks,
                "mapped question has invalid allotted marks; staging 0"
            );
            0.0
        };
        Self {
            text: Some(mapped.text).filter(|text| !text.trim().is_empty()),
            allotted_marks,
            obtained_marks: 0.0,
            mapped_topic_id: Some(mapped.mapped_topic_id).filter(|id| !id.is_empty()),
            mapped_subtopic_id: mapped.mapped_subtopic_id,
        }
    }
}

/// Running score of a draft, as shown while marks are entered.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct LiveSummary {
    pub scored: f64,
    pub total: f64,
    /// Whole-number percentage; `0` when nothing is allotted.
    pub percentage: f64,
}

/// A paper that has been mapped but not yet saved.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DraftPaper {
    pub subject_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub questions: Vec<DraftQuestion>,
}

impl DraftPaper {
    /// Stage mapped questions; every question starts at zero obtained marks.
    #[must_use]
    pub fn from_mapped(
        subject_id: impl Into<String>,
        name: Option<String>,
        mapped: Vec<MappedQuestion>,
    ) -> Self {
        Self {
            subject_id: subject_id.into(),
            name: name.filter(|name| !name.trim().is_empty()),
            questions: mapped.into_iter().map(DraftQuestion::from).collect(),
        }
    }

    /// Set the obtained marks of the question at `index` (0-based).
    ///
    /// # Errors
    ///
    /// [`CoreError::NotFound`] for an out-of-range index,
    /// [`CoreError::Validation`] for negative or non-finite marks.
    pub fn set_obtained(&mut self, index: usize, marks: f64) -> Result<(), CoreError> {
        validate_marks(marks, "obtained")?;
        let question = self.question_mut(index)?;
        question.obtained_marks = marks;
        if marks > question.allotted_marks {
            tracing::warn!(
                question = index + 1,
                obtained = marks,
                allotted = question.allotted_marks,
                "obtained marks exceed allotted marks"
            );
        }
        Ok(())
    }

    /// Set the allotted marks of the question at `index` (0-based).
    ///
    /// # Errors
    ///
    /// Same as [`Self::set_obtained`].
    pub fn set_allotted(&mut self, index: usize, marks: f64) -> Result<(), CoreError> {
        validate_marks(marks, "allotted")?;
        self.question_mut(index)?.allotted_marks = marks;
        Ok(())
    }

    /// Indices (0-based) of questions scored above their allotted marks.
    #[must_use]
    pub fn over_scored(&self) -> Vec<usize> {
        self.questions
            .iter()
            .enumerate()
            .filter(|(_, q)| q.obtained_marks > q.allotted_marks)
            .map(|(index, _)| index)
            .collect()
    }

    #[must_use]
    pub fn live_summary(&self) -> LiveSummary {
        let (scored, total) = self.questions.iter().fold((0.0, 0.0), |(s, t), q| {
            (s + q.obtained_marks, t + q.allotted_marks)
        });
        let percentage = if total > 0.0 {
            (scored / total * 100.0).round()
        } else {
            0.0
        };
        LiveSummary {
            scored,
            total,
            percentage,
        }
    }

    /// Turn the draft into a saved paper dated `now`.
    ///
    /// Missing names fall back to `Exam {date}`, missing question text to
    /// `Question {n}`, and missing topic ids to the empty (unmapped) id.
    ///
    /// # Errors
    ///
    /// [`CoreError::Validation`] if the draft has no questions.
    pub fn finalize(self, now: DateTime<Utc>) -> Result<ExamPaper, CoreError> {
        if self.questions.is_empty() {
            return Err(CoreError::Validation(
                "cannot finalize a paper without questions".to_string(),
            ));
        }

        let questions = self
            .questions
            .into_iter()
            .enumerate()
            .map(|(index, draft)| {
                Ok(Question {
                    id: gen_id(PREFIX_QUESTION)?,
                    text: draft
                        .text
                        .unwrap_or_else(|| format!("Question {}", index + 1)),
                    allotted_marks: draft.allotted_marks,
                    obtained_marks: draft.obtained_marks,
                    mapped_topic_id: draft.mapped_topic_id.unwrap_or_default(),
                    mapped_subtopic_id: draft.mapped_subtopic_id,
                })
            })
            .collect::<Result<Vec<_>, CoreError>>()?;

        Ok(ExamPaper {
            id: gen_id(PREFIX_PAPER)?,
            subject_id: self.subject_id,
            name: self
                .name
                .unwrap_or_else(|| format!("Exam {}", now.format("%Y-%m-%d"))),
            date: now,
            questions,
        })
    }

    fn question_mut(&mut self, index: usize) -> Result<&mut DraftQuestion, CoreError> {
        self.questions
            .get_mut(index)
            .ok_or_else(|| CoreError::not_found("draft question", (index + 1).to_string()))
    }
}

fn validate_marks(marks: f64, field: &str) -> Result<(), CoreError> {
    if !marks.is_finite() {
        return Err(CoreError::Validation(format!(
            "{field} marks must be a finite number"
        )));
    }
    if marks < 0.0 {
        return Err(CoreError::Validation(format!(
            "{field} marks must not be negative (got {marks})"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    use super::*;

    fn mapped(text: &str, allotted: f64, topic: &str) -> MappedQuestion {
        MappedQuestion {
            text: text.to_string(),
            allotted_marks: allotted,
            mapped_topic_id: topic.to_string(),
            mapped_subtopic_id: None,
        }
    }

    fn draft() -> DraftPaper {
        DraftPaper::from_mapped(
            "sub-1",
            None,
            vec![mapped("Define velocity", 10.0, "t1"), mapped("", 5.0, "")],
        )
    }

    #[test]
    fn mapped_questions_start_at_zero() {
        let draft = draft();
        assert!(draft.questions.iter().all(|q| q.obtained_marks == 0.0));
        assert_eq!(draft.questions[1].text, None);
        assert_eq!(draft.questions[1].mapped_topic_id, None);
    }

    #[test]
    fn invalid_mapped_allotted_marks_are_staged_as_zero() {
        let draft = DraftPaper::from_mapped(
            "sub-1",
            None,
            vec![
                mapped("a", -4.0, "t1"),
                mapped("b", f64::NAN, "t1"),
                mapped("c", 2.5, "t1"),
            ],
        );
        let allotted: Vec<f64> = draft.questions.iter().map(|q| q.allotted_marks).collect();
        assert_eq!(allotted, vec![0.0, 0.0, 2.5]);

        let paper = draft.finalize(Utc::now()).unwrap();
        assert!(paper.questions.iter().all(|q| q.allotted_marks >= 0.0));
    }

    #[test]
    fn rejects_negative_and_non_finite_marks() {
        let mut draft = draft();
        assert!(matches!(
            draft.set_obtained(0, -1.0),
            Err(CoreError::Validation(_))
        ));
        assert!(matches!(
            draft.set_allotted(0, f64::INFINITY),
            Err(CoreError::Validation(_))
        ));
        assert!(matches!(
            draft.set_obtained(0, f64::NAN),
            Err(CoreError::Validation(_))
        ));
        assert_eq!(draft.questions[0].obtained_marks, 0.0);
    }

    #[test]
    fn out_of_range_index_is_not_found() {
        let mut draft = draft();
        let err = draft.set_obtained(5, 1.0).unwrap_err();
        assert!(matches!(err, CoreError::NotFound { .. }));
    }

    #[test]
    fn over_scoring_is_accepted_and_reported() {
        let mut draft = draft();
        draft.set_obtained(1, 7.0).unwrap();
        assert_eq!(draft.questions[1].obtained_marks, 7.0);
        assert_eq!(draft.over_scored(), vec![1]);
    }

    #[test]
    fn live_summary_rounds_percentage() {
        let mut draft = draft();
        draft.set_obtained(0, 8.0).unwrap();
        draft.set_obtained(1, 2.0).unwrap();
        let summary = draft.live_summary();
        assert_eq!(summary.scored, 10.0);
        assert_eq!(summary.total, 15.0);
        assert_eq!(summary.percentage, 67.0);
    }

    #[test]
    fn live_summary_of_empty_draft_is_zero() {
        let draft = DraftPaper::from_mapped("sub-1", None, Vec::new());
        assert_eq!(draft.live_summary().percentage, 0.0);
    }

    #[test]
    fn finalize_applies_defaults() {
        let mut draft = draft();
        draft.set_obtained(0, 8.0).unwrap();
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap();

        let paper = draft.finalize(now).unwrap();

        assert!(paper.id.starts_with("pap-"));
        assert_eq!(paper.subject_id, "sub-1");
        assert_eq!(paper.name, "Exam 2024-03-01");
        assert_eq!(paper.date, now);
        assert_eq!(paper.questions[0].text, "Define velocity");
        assert_eq!(paper.questions[0].obtained_marks, 8.0);
        assert_eq!(paper.questions[0].mapped_topic_id, "t1");
        assert_eq!(paper.questions[1].text, "Question 2");
        assert_eq!(paper.questions[1].mapped_topic_id, "");
        assert_ne!(paper.questions[0].id, paper.questions[1].id);
    }

    #[test]
    fn finalize_keeps_given_name() {
        let draft = DraftPaper::from_mapped(
            "sub-1",
            Some("Unit Test 1".to_string()),
            vec![mapped("q", 1.0, "t1")],
        );
        let paper = draft.finalize(Utc::now()).unwrap();
        assert_eq!(paper.name, "Unit Test 1");
    }

    #[test]
    fn empty_draft_cannot_be_finalized() {
        let draft = DraftPaper::from_mapped("sub-1", Some("  ".to_string()), Vec::new());
        assert_eq!(draft.name, None);
        assert!(matches!(
            draft.finalize(Utc::now()),
            Err(CoreError::Validation(_))
        ));
    }
}
