mod compose;
mod composing;
mod create;
mod list;
mod respond;
mod revise;
mod send;
mod show;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::LetterCommands;
use crate::context::AppContext;

/// Handle `slp letter`.
pub async fn handle(
    action: &LetterCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        LetterCommands::Create {
            project_id,
            publisher,
            body,
        } => create::run(project_id, publisher, body.as_deref(), ctx, flags).await,
        LetterCommands::List { project_id, limit } => {
            list::run(project_id, *limit, ctx, flags).await
        }
        LetterCommands::Show { id } => show::run(id, ctx, flags).await,
        LetterCommands::Revise { id, body } => revise::run(id, body, ctx, flags).await,
        LetterCommands::Send { id } => send::run(id, ctx, flags).await,
        LetterCommands::Respond { id, response } => respond::run(id, response, ctx, flags).await,
        LetterCommands::Compose {
            project_id,
            publisher,
        } => compose::run(project_id, publisher, ctx, flags).await,
    }
}
