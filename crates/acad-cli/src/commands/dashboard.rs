use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `acad dashboard`.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&ctx.store.dashboard(), flags.format)
}
