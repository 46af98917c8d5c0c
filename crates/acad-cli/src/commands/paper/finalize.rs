use chrono::Utc;

use super::draft::require_draft;
use super::get::PaperDetailResponse;
use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub fn run(ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    require_draft(&ctx.store)?;
    let paper = ctx.store.finalize_draft(Utc::now())?;
    tracing::debug!(id = %paper.id, questions = paper.questions.len(), "saved exam paper");
    output(
        &PaperDetailResponse::new(&paper, ctx.store.subjects()),
        flags.format,
    )
}
