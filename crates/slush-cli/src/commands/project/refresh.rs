use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let overview = ctx.service.refresh_project_stage(id).await?;
    output(&overview, flags.format)
}
