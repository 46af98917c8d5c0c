mod delete;
mod discard;
mod draft;
mod finalize;
mod get;
mod list;
mod map;
mod mark;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::PaperCommands;
use crate::context::AppContext;

/// Handle `acad paper`.
pub async fn handle(
    action: &PaperCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        PaperCommands::Map {
            subject,
            name,
            text,
            file,
        } => {
            map::run(
                subject,
                name.as_deref(),
                text.as_deref(),
                file.as_deref(),
                ctx,
                flags,
            )
            .await
        }
        PaperCommands::Draft => draft::run(ctx, flags),
        PaperCommands::Mark {
            index,
            obtained,
            allotted,
        } => mark::run(*index, *obtained, *allotted, ctx, flags),
        PaperCommands::Finalize => finalize::run(ctx, flags),
        PaperCommands::Discard => discard::run(ctx, flags),
        PaperCommands::List { subject, limit } => {
            list::run(subject.as_deref(), *limit, ctx, flags)
        }
        PaperCommands::Get { id } => get::run(id, ctx, flags),
        PaperCommands::Delete { id } => delete::run(id, ctx, flags),
    }
}
