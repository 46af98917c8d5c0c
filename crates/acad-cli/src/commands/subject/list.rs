use acad_core::entities::Subject;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct SubjectListResponse<'a> {
    subjects: &'a [Subject],
}

pub fn run(limit: Option<u32>, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let limit = effective_limit(limit, flags.limit, ctx.config.general.default_limit);
    let subjects = ctx.store.subjects();
    let shown = &subjects[..subjects.len().min(limit)];
    output(&SubjectListResponse { subjects: shown }, flags.format)
}
