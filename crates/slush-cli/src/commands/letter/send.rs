use serde::Serialize;
use slush_core::entities::QueryLetter;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct LetterResponse {
    letter: QueryLetter,
}

pub async fn run(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let letter = ctx.service.send_letter(id).await?;
    output(&LetterResponse { letter }, flags.format)
}
