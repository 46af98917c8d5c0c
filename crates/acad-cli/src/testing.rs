//! Scripted [`StudyAssistant`] and store fixtures for workflow tests.

use std::sync::Mutex;

use acad_ai::{AiError, StudyAssistant};
use acad_core::analysis::AnalysisResult;
use acad_core::entities::{MappedQuestion, StudyRecommendation, Subject, Topic};
use acad_store::{MemoryKvStore, StudyStore};

/// Returns the scripted value for each operation, or an API error when the
/// script is `None`.
#[derive(Default)]
pub struct FakeAssistant {
    pub syllabus: Option<Vec<Topic>>,
    pub questions: Option<Vec<MappedQuestion>>,
    pub recommendations: Option<Vec<StudyRecommendation>>,
    pub calls: Mutex<Vec<&'static str>>,
}

impl FakeAssistant {
    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    fn answer<T: Clone>(&self, call: &'static str, script: Option<&T>) -> Result<T, AiError> {
        self.calls.lock().unwrap().push(call);
        script.cloned().ok_or_else(|| AiError::Api {
            status: 500,
            message: "scripted failure".to_string(),
        })
    }
}

impl StudyAssistant for FakeAssistant {
    async fn generate_syllabus(
        &self,
        _subject_name: &str,
        _syllabus_text: Option<&str>,
    ) -> Result<Vec<Topic>, AiError> {
        self.answer("syllabus", self.syllabus.as_ref())
    }

    async fn map_questions(
        &self,
        _paper_text: &str,
        _syllabus: &[Topic],
    ) -> Result<Vec<MappedQuestion>, AiError> {
        self.answer("map", self.questions.as_ref())
    }

    async fn generate_study_recommendations(
        &self,
        _results: &[AnalysisResult],
        _subject_name: &str,
    ) -> Result<Vec<StudyRecommendation>, AiError> {
        self.answer("recommend", self.recommendations.as_ref())
    }
}

pub fn topic(id: &str, name: &str) -> Topic {
    Topic {
        id: id.to_string(),
        name: name.to_string(),
        subtopics: Vec::new(),
    }
}

pub fn mapped(text: &str, allotted: f64, topic_id: &str) -> MappedQuestion {
    MappedQuestion {
        text: text.to_string(),
        allotted_marks: allotted,
        mapped_topic_id: topic_id.to_string(),
        mapped_subtopic_id: None,
    }
}

/// A memory-backed store holding Physics (`phy`: T1 Kinematics, T2 Thermo).
pub fn physics_store() -> StudyStore<MemoryKvStore> {
    let mut store = StudyStore::load(MemoryKvStore::new());
    store
        .add_subject(Subject {
            id: "phy".to_string(),
            name: "Physics".to_string(),
            syllabus: vec![topic("T1", "Kinematics"), topic("T2", "Thermo")],
        })
        .unwrap();
    store
}
