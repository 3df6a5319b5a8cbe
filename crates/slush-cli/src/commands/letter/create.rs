use serde_json::json;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

use super::composing::compose_for_project;

pub async fn run(
    project_id: &str,
    publisher: &str,
    body: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let (body, warnings) = match body {
        Some(body) => (body.to_string(), Vec::new()),
        None => {
            let composed = compose_for_project(project_id, ctx).await?;
            (composed.body, composed.warnings)
        }
    };

    let letter = ctx
        .service
        .create_letter(project_id, publisher, &body)
        .await?;

    output(
        &json!({
            "letter": letter,
            "warnings": warnings,
        }),
        flags.format,
    )
}
