//! Topic-wise performance aggregation.
//!
//! [`compute_analysis`] is a pure function over the subject and paper
//! collections. Results are never cached or persisted; every call recomputes
//! from scratch. Marks are summed as given, so negative marks or
//! over-scoring flow straight into the totals and percentage.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{ExamPaper, Subject, Topic};
use crate::enums::TopicStatus;

/// Aggregated performance for one syllabus topic.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub topic_id: String,
    pub topic_name: String,
    pub total_allotted: f64,
    pub total_obtained: f64,
    pub percentage: f64,
    pub status: TopicStatus,
}

/// Number of topics per status tier.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct StatusTally {
    pub strong: usize,
    pub average: usize,
    pub weak: usize,
}

impl StatusTally {
    #[must_use]
    pub const fn total(&self) -> usize {
        self.strong + self.average + self.weak
    }
}

/// Compute per-topic performance for `subject_id`, in syllabus order.
///
/// An unknown `subject_id` yields an empty vec ("nothing selected").
#[must_use]
pub fn compute_analysis(
    subject_id: &str,
    subjects: &[Subject],
    papers: &[ExamPaper],
) -> Vec<AnalysisResult> {
    let Some(subject) = subjects.iter().find(|s| s.id == subject_id) else {
        return Vec::new();
    };

    let subject_papers: Vec<&ExamPaper> = papers
        .iter()
        .filter(|paper| paper.subject_id == subject_id)
        .collect();

    subject
        .syllabus
        .iter()
        .map(|topic| analyze_topic(topic, &subject_papers))
        .collect()
}

fn analyze_topic(topic: &Topic, papers: &[&ExamPaper]) -> AnalysisResult {
    let (total_allotted, total_obtained) = papers
        .iter()
        .flat_map(|paper| paper.questions.iter())
        .filter(|question| question.mapped_topic_id == topic.id)
        .fold((0.0, 0.0), |(allotted, obtained), question| {
            (
                allotted + question.allotted_marks,
                obtained + question.obtained_marks,
            )
        });

    let percentage = percentage_of(total_obtained, total_allotted);

    AnalysisResult {
        topic_id: topic.id.clone(),
        topic_name: topic.name.clone(),
        total_allotted,
        total_obtained,
        percentage,
        status: TopicStatus::from_percentage(percentage),
    }
}

/// `obtained / allotted * 100`, or `0` when nothing was allotted.
#[must_use]
pub fn percentage_of(obtained: f64, allotted: f64) -> f64 {
    if allotted > 0.0 {
        obtained / allotted * 100.0
    } else {
        0.0
    }
}

/// Count results per status tier.
#[must_use]
pub fn tally(results: &[AnalysisResult]) -> StatusTally {
    results
        .iter()
        .fold(StatusTally::default(), |mut tally, result| {
            match result.status {
                TopicStatus::Strong => tally.strong += 1,
                TopicStatus::Average => tally.average += 1,
                TopicStatus::Weak => tally.weak += 1,
            }
            tally
        })
}

/// The first weak topic in syllabus order, the suggested next focus.
#[must_use]
pub fn focus_topic(results: &[AnalysisResult]) -> Option<&AnalysisResult> {
    results
        .iter()
        .find(|result| result.status == TopicStatus::Weak)
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::entities::Question;

    fn topic(id: &str, name: &str) -> Topic {
        Topic {
            id: id.to_string(),
            name: name.to_string(),
            subtopics: Vec::new(),
        }
    }

    fn physics() -> Subject {
        Subject {
            id: "physics".to_string(),
            name: "Physics".to_string(),
            syllabus: vec![topic("T1", "Kinematics"), topic("T2", "Thermo")],
        }
    }

    fn question(allotted: f64, obtained: f64, topic_id: &str) -> Question {
        Question {
            id: format!("q-{topic_id}-{allotted}-{obtained}"),
            text: "question".to_string(),
            allotted_marks: allotted,
            obtained_marks: obtained,
            mapped_topic_id: topic_id.to_string(),
            mapped_subtopic_id: None,
        }
    }

    fn paper(id: &str, subject_id: &str, questions: Vec<Question>) -> ExamPaper {
        ExamPaper {
            id: id.to_string(),
            subject_id: subject_id.to_string(),
            name: id.to_string(),
            date: Utc::now(),
            questions,
        }
    }

    fn result(
        id: &str,
        name: &str,
        allotted: f64,
        obtained: f64,
        percentage: f64,
        status: TopicStatus,
    ) -> AnalysisResult {
        AnalysisResult {
            topic_id: id.to_string(),
            topic_name: name.to_string(),
            total_allotted: allotted,
            total_obtained: obtained,
            percentage,
            status,
        }
    }

    #[test]
    fn single_paper_scenario() {
        let papers = vec![paper(
            "p1",
            "physics",
            vec![question(10.0, 8.0, "T1"), question(10.0, 3.0, "T2")],
        )];

        let results = compute_analysis("physics", &[physics()], &papers);

        assert_eq!(
            results,
            vec![
                result("T1", "Kinematics", 10.0, 8.0, 80.0, TopicStatus::Strong),
                result("T2", "Thermo", 10.0, 3.0, 30.0, TopicStatus::Weak),
            ]
        );
    }

    #[test]
    fn sums_across_papers() {
        let papers = vec![
            paper(
                "p1",
                "physics",
                vec![question(10.0, 8.0, "T1"), question(10.0, 3.0, "T2")],
            ),
            paper("p2", "physics", vec![question(5.0, 5.0, "T1")]),
        ];

        let results = compute_analysis("physics", &[physics()], &papers);
        let t1 = &results[0];

        assert_eq!(t1.total_allotted, 15.0);
        assert_eq!(t1.total_obtained, 13.0);
        assert!((t1.percentage - 86.666_666).abs() < 1e-3);
        assert_eq!(t1.status, TopicStatus::Strong);
    }

    #[test]
    fn unknown_subject_is_empty() {
        let papers = vec![paper("p1", "physics", vec![question(10.0, 8.0, "T1")])];
        assert!(compute_analysis("chemistry", &[physics()], &papers).is_empty());
    }

    #[test]
    fn empty_syllabus_is_empty() {
        let subject = Subject {
            id: "s".to_string(),
            name: "Empty".to_string(),
            syllabus: Vec::new(),
        };
        let papers = vec![paper("p1", "s", vec![question(10.0, 8.0, "T1")])];
        assert!(compute_analysis("s", &[subject], &papers).is_empty());
    }

    #[test]
    fn topic_without_questions_is_zero_and_weak() {
        let papers = vec![paper("p1", "physics", vec![question(10.0, 8.0, "T1")])];
        let results = compute_analysis("physics", &[physics()], &papers);

        assert_eq!(
            results[1],
            result("T2", "Thermo", 0.0, 0.0, 0.0, TopicStatus::Weak)
        );
    }

    #[test]
    fn ignores_other_subjects_and_unmapped_questions() {
        let papers = vec![
            paper("p1", "physics", vec![question(10.0, 10.0, "")]),
            paper("p2", "chemistry", vec![question(10.0, 0.0, "T1")]),
        ];
        let results = compute_analysis("physics", &[physics()], &papers);
        assert_eq!(results[0].total_allotted, 0.0);
        assert_eq!(results[0].status, TopicStatus::Weak);
    }

    #[test]
    fn output_follows_syllabus_order() {
        let papers = vec![
            paper("p2", "physics", vec![question(4.0, 4.0, "T2")]),
            paper(
                "p1",
                "physics",
                vec![question(4.0, 1.0, "T2"), question(4.0, 0.0, "T1")],
            ),
        ];
        let ids: Vec<String> = compute_analysis("physics", &[physics()], &papers)
            .into_iter()
            .map(|r| r.topic_id)
            .collect();
        assert_eq!(ids, vec!["T1".to_string(), "T2".to_string()]);
    }

    #[test]
    fn repeated_calls_are_identical() {
        let subjects = vec![physics()];
        let papers = vec![paper(
            "p1",
            "physics",
            vec![question(3.0, 1.0, "T1"), question(7.0, 7.0, "T2")],
        )];
        let first = compute_analysis("physics", &subjects, &papers);
        let second = compute_analysis("physics", &subjects, &papers);
        assert_eq!(first, second);
        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.percentage.to_bits(), b.percentage.to_bits());
        }
    }

    #[test]
    fn out_of_range_marks_pass_through() {
        let papers = vec![paper(
            "p1",
            "physics",
            vec![question(10.0, 12.0, "T1"), question(10.0, -2.0, "T2")],
        )];
        let results = compute_analysis("physics", &[physics()], &papers);
        assert_eq!(results[0].percentage, 120.0);
        assert_eq!(results[0].status, TopicStatus::Strong);
        assert_eq!(results[1].total_obtained, -2.0);
        assert_eq!(results[1].percentage, -20.0);
        assert_eq!(results[1].status, TopicStatus::Weak);
    }

    #[test]
    fn boundary_percentages_take_higher_tier() {
        let papers = vec![paper(
            "p1",
            "physics",
            vec![question(4.0, 3.0, "T1"), question(5.0, 2.0, "T2")],
        )];
        let results = compute_analysis("physics", &[physics()], &papers);
        assert_eq!(results[0].percentage, 75.0);
        assert_eq!(results[0].status, TopicStatus::Strong);
        assert_eq!(results[1].percentage, 40.0);
        assert_eq!(results[1].status, TopicStatus::Average);
    }

    #[test]
    fn tally_counts_each_tier() {
        let results = vec![
            result("a", "A", 1.0, 1.0, 100.0, TopicStatus::Strong),
            result("b", "B", 1.0, 0.5, 50.0, TopicStatus::Average),
            result("c", "C", 0.0, 0.0, 0.0, TopicStatus::Weak),
            result("d", "D", 1.0, 0.0, 0.0, TopicStatus::Weak),
        ];
        let counts = tally(&results);
        assert_eq!(
            counts,
            StatusTally {
                strong: 1,
                average: 1,
                weak: 2
            }
        );
        assert_eq!(counts.total(), 4);

        let mut reversed = results;
        reversed.reverse();
        assert_eq!(tally(&reversed), counts);
    }

    #[test]
    fn tally_serializes_with_tier_names() {
        let json = serde_json::to_value(StatusTally {
            strong: 2,
            average: 0,
            weak: 1,
        })
        .unwrap();
        assert_eq!(json["Strong"], 2);
        assert_eq!(json["Average"], 0);
        assert_eq!(json["Weak"], 1);
    }

    #[test]
    fn focus_is_first_weak_topic() {
        let results = vec![
            result("a", "A", 1.0, 1.0, 100.0, TopicStatus::Strong),
            result("b", "B", 1.0, 0.1, 10.0, TopicStatus::Weak),
            result("c", "C", 1.0, 0.0, 0.0, TopicStatus::Weak),
        ];
        assert_eq!(focus_topic(&results).map(|r| r.topic_id.as_str()), Some("b"));
        assert!(focus_topic(&results[..1]).is_none());
    }
}
