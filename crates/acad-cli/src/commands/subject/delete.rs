use acad_core::responses::SubjectDeleteResponse;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub fn run(id: &str, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let papers_removed = ctx.store.remove_subject(id)?;
    output(
        &SubjectDeleteResponse {
            subject_id: id.to_string(),
            papers_removed,
        },
        flags.format,
    )
}
