mod show;
mod suggest;
mod summary;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AnalysisCommands;
use crate::context::AppContext;

/// Handle `acad analysis`.
pub async fn handle(
    action: &AnalysisCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        AnalysisCommands::Show { subject_id } => show::run(subject_id, ctx, flags),
        AnalysisCommands::Summary { subject_id } => summary::run(subject_id, ctx, flags),
        AnalysisCommands::Suggest { subject_id } => suggest::run(subject_id, ctx, flags).await,
    }
}

/// Unknown subjects analyse to nothing; say so instead of printing a bare
/// empty result.
fn notice_unknown_subject(ctx: &AppContext, subject_id: &str) {
    if ctx.store.subject(subject_id).is_none() {
        crate::ui::notice(&format!("no subject with id '{subject_id}'"));
    }
}
