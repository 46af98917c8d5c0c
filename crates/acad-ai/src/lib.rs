//! # acad-ai
//!
//! Generative-AI collaborator for AcademiSync.
//!
//! Three request/response operations, all fallible and side-effect free:
//! - syllabus generation from a subject name and optional syllabus text
//! - question extraction and topic mapping from raw paper text
//! - per-topic study recommendations from analysis results
//!
//! [`StudyAssistant`] is the seam the CLI workflows depend on;
//! [`GeminiClient`] implements it against the Gemini REST API. Model output
//! is parsed leniently (see [`parse`]): malformed content becomes an empty
//! result, never an error.

mod error;
mod gemini;
mod http;
pub mod parse;
mod prompts;
mod schema;

use std::future::Future;

use acad_core::analysis::AnalysisResult;
use acad_core::entities::{MappedQuestion, StudyRecommendation, Topic};

pub use error::AiError;
pub use gemini::GeminiClient;

/// The AI operations used by the study workflows.
pub trait StudyAssistant {
    /// Produce a syllabus for `subject_name`, structured from
    /// `syllabus_text` when given. Topic ids in the result are non-empty and
    /// unique.
    fn generate_syllabus(
        &self,
        subject_name: &str,
        syllabus_text: Option<&str>,
    ) -> impl Future<Output = Result<Vec<Topic>, AiError>> + Send;

    /// Extract questions from `paper_text` and map each to a topic of
    /// `syllabus`. Zero questions is a valid result.
    fn map_questions(
        &self,
        paper_text: &str,
        syllabus: &[Topic],
    ) -> impl Future<Output = Result<Vec<MappedQuestion>, AiError>> + Send;

    /// Advisory per-topic recommendations.
    fn generate_study_recommendations(
        &self,
        results: &[AnalysisResult],
        subject_name: &str,
    ) -> impl Future<Output = Result<Vec<StudyRecommendation>, AiError>> + Send;
}
