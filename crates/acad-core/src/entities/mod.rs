//! Entity structs for all AcademiSync domain objects.
//!
//! Persisted entities serialize with camelCase field names so snapshots stay
//! compatible with the browser-storage format. All structs derive
//! `Serialize`, `Deserialize`, and `JsonSchema` for JSON roundtrip and
//! schema validation.

mod mapped;
mod paper;
mod recommendation;
mod subject;

pub use mapped::MappedQuestion;
pub use paper::{ExamPaper, Question};
pub use recommendation::StudyRecommendation;
pub use subject::{Subject, Subtopic, Topic, normalize_syllabus};
