use acad_core::draft::DraftPaper;
use acad_store::{KvStore, StudyStore};

use super::draft::{DraftView, require_draft};
use crate::cli::GlobalFlags;
use crate::context::AppContext;

pub fn run(
    index: usize,
    obtained: f64,
    allotted: Option<f64>,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let draft = mark_draft(&mut ctx.store, index, obtained, allotted)?;
    DraftView::of(&draft).print(flags)
}

/// Update marks of question `number` (1-based) in the pending draft.
pub(crate) fn mark_draft<S: KvStore>(
    store: &mut StudyStore<S>,
    number: usize,
    obtained: f64,
    allotted: Option<f64>,
) -> anyhow::Result<DraftPaper> {
    let mut draft = require_draft(store)?;
    let index = number
        .checked_sub(1)
        .ok_or_else(|| anyhow::anyhow!("question numbers start at 1"))?;

    if let Some(allotted) = allotted {
        draft.set_allotted(index, allotted)?;
    }
    draft.set_obtained(index, obtained)?;

    store.save_draft(&draft)?;
    Ok(draft)
}
