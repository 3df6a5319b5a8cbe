mod create;
mod list;
mod publish;
mod refresh;
mod rename;
mod show;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ProjectCommands;
use crate::context::AppContext;

/// Handle `slp project`.
pub async fn handle(
    action: &ProjectCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ProjectCommands::Create { title } => create::run(title.as_deref(), ctx, flags).await,
        ProjectCommands::List { limit } => list::run(*limit, ctx, flags).await,
        ProjectCommands::Show { id } => show::run(id, ctx, flags).await,
        ProjectCommands::Rename { id, title } => rename::run(id, title, ctx, flags).await,
        ProjectCommands::Publish { id } => publish::run(id, true, ctx, flags).await,
        ProjectCommands::Unpublish { id } => publish::run(id, false, ctx, flags).await,
        ProjectCommands::Refresh { id } => refresh::run(id, ctx, flags).await,
    }
}
