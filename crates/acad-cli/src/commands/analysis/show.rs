use acad_core::analysis::AnalysisResult;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct AnalysisResponse {
    results: Vec<AnalysisResult>,
}

pub fn run(subject_id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    super::notice_unknown_subject(ctx, subject_id);
    let results = ctx.store.analysis(subject_id);
    output(&AnalysisResponse { results }, flags.format)
}
