use serde::Serialize;
use slush_core::entities::Project;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ProjectResponse {
    project: Project,
}

/// Shared by `publish` and `unpublish`; only the target visibility differs.
pub async fn run(
    id: &str,
    is_public: bool,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let project = ctx.service.set_project_visibility(id, is_public).await?;
    output(&ProjectResponse { project }, flags.format)
}
