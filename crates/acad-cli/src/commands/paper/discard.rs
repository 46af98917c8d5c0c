use serde_json::json;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub fn run(ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let discarded = ctx.store.draft()?.is_some();
    ctx.store.clear_draft()?;
    output(&json!({ "discarded": discarded }), flags.format)
}
