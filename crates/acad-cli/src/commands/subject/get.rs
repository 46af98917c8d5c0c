use acad_core::entities::Subject;
use acad_core::responses::PaperSummary;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct SubjectDetailResponse<'a> {
    subject: &'a Subject,
    papers: Vec<PaperSummary>,
}

pub fn run(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let subject = ctx.store.require_subject(id)?;
    let papers = ctx.store.paper_summaries(Some(id));
    output(&SubjectDetailResponse { subject, papers }, flags.format)
}
