mod create;
mod delete;
mod get;
mod import;
mod list;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::SubjectCommands;
use crate::context::AppContext;

/// Handle `acad subject`.
pub async fn handle(
    action: &SubjectCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        SubjectCommands::Create {
            name,
            syllabus_file,
            syllabus,
        } => {
            create::run(
                name,
                syllabus.as_deref(),
                syllabus_file.as_deref(),
                ctx,
                flags,
            )
            .await
        }
        SubjectCommands::Import { name, topics_file } => {
            import::run(name, topics_file, ctx, flags)
        }
        SubjectCommands::List { limit } => list::run(*limit, ctx, flags),
        SubjectCommands::Get { id } => get::run(id, ctx, flags),
        SubjectCommands::Delete { id } => delete::run(id, ctx, flags),
    }
}
