use serde::Serialize;
use slush_core::entities::Message;

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct MessageListResponse {
    messages: Vec<Message>,
}

pub async fn run(
    project_id: &str,
    limit: Option<u32>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let limit = effective_limit(limit, flags.limit, ctx.config.general.default_limit);
    let messages = ctx.service.list_messages(project_id, limit).await?;
    output(&MessageListResponse { messages }, flags.format)
}
