//! Prompt text for the three assistant operations.

use acad_core::analysis::AnalysisResult;
use acad_core::entities::Topic;

/// Prompt for syllabus extraction. With `content`, the model structures the
/// supplied syllabus; without it, the model proposes one from common
/// academic standards.
pub fn syllabus(subject_name: &str, content: Option<&str>) -> String {
    match content.map(str::trim).filter(|c| !c.is_empty()) {
        Some(content) => format!(
            "Analyze the following official syllabus content for the subject \"{subject_name}\" \
             and extract a structured list of main topics and their subtopics.\n\
             CONTENT:\n{content}"
        ),
        None => format!(
            "Analyze the subject \"{subject_name}\" and provide a structured syllabus with main \
             topics and their subtopics based on common academic standards."
        ),
    }
}

/// Prompt for question extraction and topic mapping.
pub fn map_questions(paper_text: &str, syllabus: &[Topic]) -> Result<String, serde_json::Error> {
    let syllabus = serde_json::to_string(syllabus)?;
    Ok(format!(
        "Given the following question paper text and syllabus structure, identify the questions \
         and map each to the most relevant topic and subtopic from the syllabus. Use the topic \
         and subtopic ids exactly as they appear in the syllabus.\n\n\
         PAPER TEXT:\n{paper_text}\n\n\
         SYLLABUS:\n{syllabus}"
    ))
}

/// Prompt for per-topic study recommendations.
pub fn recommendations(
    results: &[AnalysisResult],
    subject_name: &str,
) -> Result<String, serde_json::Error> {
    let performance = serde_json::to_string(results)?;
    Ok(format!(
        "Act as an academic counselor. Based on this student's performance in \"{subject_name}\", \
         provide study recommendations for each topic.\n\
         Performance Data: {performance}"
    ))
}
