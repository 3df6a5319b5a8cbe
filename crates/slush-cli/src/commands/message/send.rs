use serde_json::json;
use slush_compose::guidance_reply;
use slush_core::enums::MessageRole;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Append the author's message, then the deterministic guidance reply.
///
/// The reply is computed from the manuscript as it stands after the user
/// row is written; both rows get their own seq and the stage refresh runs
/// on the final counts.
pub async fn run(
    project_id: &str,
    text: &str,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let message = ctx
        .service
        .append_message(project_id, MessageRole::User, text)
        .await?;

    let manuscript = ctx.service.get_manuscript(project_id).await?;
    let reply_body = guidance_reply(manuscript.as_ref());
    let reply = ctx
        .service
        .append_message(project_id, MessageRole::Assistant, &reply_body)
        .await?;

    let overview = ctx.service.refresh_project_stage(project_id).await?;

    output(
        &json!({
            "message": message,
            "reply": reply,
            "project": overview,
        }),
        flags.format,
    )
}
