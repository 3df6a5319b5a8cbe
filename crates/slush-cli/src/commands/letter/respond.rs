use slush_core::responses::LetterWithHistory;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Record the publisher's response and return the letter with its history,
/// response event included.
pub async fn run(
    id: &str,
    response: &str,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let letter = ctx.service.record_response(id, response).await?;
    let history = ctx.service.letter_history(id).await?;
    output(&LetterWithHistory { letter, history }, flags.format)
}
