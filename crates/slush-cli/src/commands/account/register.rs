use serde::Serialize;
use slush_core::entities::Profile;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

use super::fields::ProfileFlags;

#[derive(Debug, Serialize)]
struct RegisterResponse {
    profile: Profile,
}

pub async fn run(fields: ProfileFlags, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let profile = ctx.service.create_profile(fields.into_update()).await?;
    output(&RegisterResponse { profile }, flags.format)
}
