use slush_core::responses::ProjectOverview;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let project = ctx.service.get_project(id).await?;
    let (message_count, letter_count) = ctx.service.project_related_counts(id).await?;
    output(
        &ProjectOverview {
            project,
            message_count,
            letter_count,
        },
        flags.format,
    )
}
