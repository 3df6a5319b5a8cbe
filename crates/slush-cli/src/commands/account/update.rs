use serde::Serialize;
use slush_core::entities::Profile;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

use super::fields::ProfileFlags;

#[derive(Debug, Serialize)]
struct ProfileResponse {
    profile: Profile,
}

pub async fn run(fields: ProfileFlags, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let profile = ctx.service.update_profile(fields.into_update()).await?;
    output(&ProfileResponse { profile }, flags.format)
}
