use acad_core::entities::{Subject, Topic, normalize_syllabus};
use acad_core::ids::{PREFIX_SUBJECT, gen_id};
use acad_store::{KvStore, StudyStore};
use anyhow::Context;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub fn run(
    name: &str,
    topics_file: &str,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let raw = std::fs::read_to_string(topics_file)
        .with_context(|| format!("failed to read {topics_file}"))?;
    let subject = import_subject(&mut ctx.store, name, &raw)
        .with_context(|| format!("failed to import syllabus from {topics_file}"))?;
    output(&subject, flags.format)
}

/// Register a subject from a user-supplied JSON array of topics.
pub(crate) fn import_subject<S: KvStore>(
    store: &mut StudyStore<S>,
    name: &str,
    topics_json: &str,
) -> anyhow::Result<Subject> {
    let topics: Vec<Topic> =
        serde_json::from_str(topics_json).context("topics must be a JSON array of topics")?;
    let subject = Subject {
        id: gen_id(PREFIX_SUBJECT)?,
        name: name.trim().to_string(),
        syllabus: normalize_syllabus(topics)?,
    };
    Ok(store.add_subject(subject)?.clone())
}
