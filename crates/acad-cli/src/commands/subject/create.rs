use acad_ai::StudyAssistant;
use acad_core::entities::Subject;
use acad_core::ids::{PREFIX_SUBJECT, gen_id};
use acad_store::{KvStore, StudyStore};
use anyhow::Context;

use crate::cli::GlobalFlags;
use crate::commands::shared::input::read_text;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

pub async fn run(
    name: &str,
    syllabus: Option<&str>,
    syllabus_file: Option<&str>,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let syllabus_text = read_text(syllabus, syllabus_file)?;
    let assistant = ctx.assistant()?;

    let progress = Progress::spinner(&format!("Generating syllabus for {name}..."));
    let created = create_subject(&mut ctx.store, &assistant, name, syllabus_text.as_deref()).await;
    progress.finish(&created, "Syllabus generation failed");

    output(&created?, flags.format)
}

/// Generate a syllabus and register the subject. A failed AI call aborts
/// before anything is stored.
pub(crate) async fn create_subject<S, A>(
    store: &mut StudyStore<S>,
    assistant: &A,
    name: &str,
    syllabus_text: Option<&str>,
) -> anyhow::Result<Subject>
where
    S: KvStore,
    A: StudyAssistant,
{
    let name = name.trim();
    if name.is_empty() {
        anyhow::bail!("subject name must not be empty");
    }

    let syllabus = assistant
        .generate_syllabus(name, syllabus_text)
        .await
        .context("failed to generate syllabus; subject was not created")?;
    if syllabus.is_empty() {
        tracing::warn!(subject = name, "generated syllabus has no topics");
    }

    let subject = Subject {
        id: gen_id(PREFIX_SUBJECT)?,
        name: name.to_string(),
        syllabus,
    };
    Ok(store.add_subject(subject)?.clone())
}
