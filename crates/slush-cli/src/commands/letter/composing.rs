use slush_compose::{ComposeError, ComposedLetter, compose_letter, missing_compose_fields};

use crate::context::AppContext;

/// Compose a letter from a project's manuscript.
///
/// A project with no manuscript row at all fails the same way as one with
/// every composer field blank, so callers see one uniform missing-fields
/// error.
pub async fn compose_for_project(
    project_id: &str,
    ctx: &AppContext,
) -> anyhow::Result<ComposedLetter> {
    ctx.service.get_project(project_id).await?;

    let manuscript = ctx.service.get_manuscript(project_id).await?;
    match manuscript {
        Some(manuscript) => Ok(compose_letter(&manuscript)?),
        None => Err(ComposeError::MissingFields(missing_compose_fields(None)).into()),
    }
}
