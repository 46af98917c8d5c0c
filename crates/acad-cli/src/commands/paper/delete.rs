use serde_json::json;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub fn run(id: &str, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let paper = ctx.store.remove_paper(id)?;
    output(
        &json!({
            "deleted": paper.id,
            "subjectId": paper.subject_id,
        }),
        flags.format,
    )
}
