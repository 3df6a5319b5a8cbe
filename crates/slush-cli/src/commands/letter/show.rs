use slush_core::responses::LetterWithHistory;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let letter = ctx.service.get_letter(id).await?;
    let history = ctx.service.letter_history(id).await?;
    output(&LetterWithHistory { letter, history }, flags.format)
}
