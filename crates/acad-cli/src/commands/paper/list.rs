use acad_core::responses::PaperSummary;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct PaperListResponse {
    papers: Vec<PaperSummary>,
}

pub fn run(
    subject: Option<&str>,
    limit: Option<u32>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    if let Some(subject_id) = subject {
        ctx.store.require_subject(subject_id)?;
    }
    let limit = effective_limit(limit, flags.limit, ctx.config.general.default_limit);

    let mut papers = ctx.store.paper_summaries(subject);
    papers.truncate(limit);

    output(&PaperListResponse { papers }, flags.format)
}
