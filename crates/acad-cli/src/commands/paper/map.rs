use acad_ai::StudyAssistant;
use acad_core::draft::DraftPaper;
use acad_store::{KvStore, StudyStore};

use serde_json::json;

use super::draft::DraftView;
use crate::cli::GlobalFlags;
use crate::commands::shared::input::require_text;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;
use crate::ui;

pub(crate) struct MapOutcome {
    /// The staged draft; on AI failure, whatever draft was already pending.
    pub draft: Option<DraftPaper>,
    pub ai_failed: bool,
}

pub async fn run(
    subject_id: &str,
    name: Option<&str>,
    text: Option<&str>,
    file: Option<&str>,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let paper_text = require_text(text, file, "paper text")?;
    let assistant = ctx.assistant()?;

    let progress = Progress::spinner("Mapping questions to the syllabus...");
    let outcome = map_paper(&mut ctx.store, &assistant, subject_id, name, &paper_text).await;
    progress.finish(&outcome, "Mapping failed");
    let outcome = outcome?;

    if outcome.ai_failed {
        ui::notice("AI mapping failed; any pending draft was kept. Run 'acad paper map' again to retry.");
    }
    match &outcome.draft {
        Some(draft) => {
            if !outcome.ai_failed && draft.questions.is_empty() {
                ui::notice("no questions were found in the paper text");
            }
            DraftView::of(draft).print(flags)
        }
        None => output(&json!({ "draft": null }), flags.format),
    }
}

/// Map paper text onto the subject's syllabus and stage the result as the
/// pending draft, replacing any previous one. A failed AI call leaves the
/// pending draft untouched.
pub(crate) async fn map_paper<S, A>(
    store: &mut StudyStore<S>,
    assistant: &A,
    subject_id: &str,
    name: Option<&str>,
    paper_text: &str,
) -> anyhow::Result<MapOutcome>
where
    S: KvStore,
    A: StudyAssistant,
{
    let syllabus = store.require_subject(subject_id)?.syllabus.clone();

    let questions = match assistant.map_questions(paper_text, &syllabus).await {
        Ok(questions) => questions,
        Err(error) => {
            tracing::warn!(%error, subject = subject_id, "question mapping failed");
            return Ok(MapOutcome {
                draft: store.draft()?,
                ai_failed: true,
            });
        }
    };

    for question in &questions {
        if !question.mapped_topic_id.is_empty()
            && !syllabus.iter().any(|t| t.id == question.mapped_topic_id)
        {
            tracing::warn!(
                topic = %question.mapped_topic_id,
                "question mapped to a topic outside the syllabus; it will not count towards analysis"
            );
        }
    }

    let draft = DraftPaper::from_mapped(subject_id, name.map(str::to_string), questions);
    store.save_draft(&draft)?;
    Ok(MapOutcome {
        draft: Some(draft),
        ai_failed: false,
    })
}
