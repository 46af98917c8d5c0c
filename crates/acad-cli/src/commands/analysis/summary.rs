use acad_core::responses::FocusSummary;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub fn run(subject_id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    super::notice_unknown_subject(ctx, subject_id);
    let results = ctx.store.analysis(subject_id);
    output(&FocusSummary::from_results(subject_id, &results), flags.format)
}
