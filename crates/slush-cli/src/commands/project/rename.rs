use serde::Serialize;
use slush_core::entities::Project;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ProjectResponse {
    project: Project,
}

pub async fn run(id: &str, title: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let project = ctx.service.rename_project(id, title).await?;
    output(&ProjectResponse { project }, flags.format)
}
