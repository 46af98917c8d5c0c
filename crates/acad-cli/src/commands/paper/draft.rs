use acad_core::draft::{DraftPaper, LiveSummary};
use acad_store::{KvStore, StudyStore};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;
use crate::ui;

/// A draft with its running score, as printed by the draft commands.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftView<'a> {
    pub draft: &'a DraftPaper,
    pub summary: LiveSummary,
    /// 1-based numbers of questions scored above their allotted marks.
    pub over_scored: Vec<usize>,
}

impl<'a> DraftView<'a> {
    pub fn of(draft: &'a DraftPaper) -> Self {
        Self {
            draft,
            summary: draft.live_summary(),
            over_scored: draft.over_scored().into_iter().map(|i| i + 1).collect(),
        }
    }

    /// Print the view, with a notice for any over-scored questions.
    pub fn print(&self, flags: &GlobalFlags) -> anyhow::Result<()> {
        if !self.over_scored.is_empty() {
            let numbers = self
                .over_scored
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            ui::notice(&format!(
                "question(s) {numbers} scored above their allotted marks"
            ));
        }
        output(self, flags.format)
    }
}

/// Load the pending draft or explain how to create one.
pub(crate) fn require_draft<S: KvStore>(store: &StudyStore<S>) -> anyhow::Result<DraftPaper> {
    store
        .draft()?
        .ok_or_else(|| anyhow::anyhow!("No pending draft. Run 'acad paper map' first."))
}

pub fn run(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let draft = require_draft(&ctx.store)?;
    DraftView::of(&draft).print(flags)
}
