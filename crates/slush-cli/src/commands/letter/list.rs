use serde::Serialize;
use slush_core::entities::QueryLetter;

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct LetterListResponse {
    letters: Vec<QueryLetter>,
}

pub async fn run(
    project_id: &str,
    limit: Option<u32>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let limit = effective_limit(limit, flags.limit, ctx.config.general.default_limit);
    let letters = ctx.service.list_letters(project_id, limit).await?;
    output(&LetterListResponse { letters }, flags.format)
}
