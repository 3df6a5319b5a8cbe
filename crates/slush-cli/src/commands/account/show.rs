use serde::Serialize;
use slush_core::entities::Profile;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ProfileResponse {
    profile: Profile,
}

pub async fn run(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let profile = ctx.service.get_own_profile().await?;
    output(&ProfileResponse { profile }, flags.format)
}
