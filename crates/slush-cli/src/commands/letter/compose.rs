use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

use super::composing::compose_for_project;

#[derive(Debug, Serialize)]
struct ComposePreviewResponse {
    publisher_name: String,
    body: String,
    warnings: Vec<String>,
}

/// Render-only preview; no letter row is written.
pub async fn run(
    project_id: &str,
    publisher: &str,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let composed = compose_for_project(project_id, ctx).await?;
    output(
        &ComposePreviewResponse {
            publisher_name: publisher.to_string(),
            body: composed.body,
            warnings: composed.warnings,
        },
        flags.format,
    )
}
