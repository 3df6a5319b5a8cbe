mod list;
mod send;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::MessageCommands;
use crate::context::AppContext;

/// Handle `slp message`.
pub async fn handle(
    action: &MessageCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        MessageCommands::Send { project_id, text } => {
            send::run(project_id, text, ctx, flags).await
        }
        MessageCommands::List { project_id, limit } => {
            list::run(project_id, *limit, ctx, flags).await
        }
    }
}
