use serde::Serialize;
use slush_compose::{IntakeField, missing_compose_fields, missing_intake_fields};
use slush_core::entities::Manuscript;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ManuscriptDetailResponse {
    manuscript: Option<Manuscript>,
    missing_intake_fields: Vec<IntakeField>,
    missing_compose_fields: Vec<IntakeField>,
}

pub async fn run(project_id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    // Surfaces NoResult for foreign projects even before any intake exists
    ctx.service.get_project(project_id).await?;

    let manuscript = ctx.service.get_manuscript(project_id).await?;
    let missing_intake = missing_intake_fields(manuscript.as_ref());
    let missing_compose = missing_compose_fields(manuscript.as_ref());
    output(
        &ManuscriptDetailResponse {
            manuscript,
            missing_intake_fields: missing_intake,
            missing_compose_fields: missing_compose,
        },
        flags.format,
    )
}
