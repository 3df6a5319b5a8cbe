mod fields;
mod register;
mod show;
mod update;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AccountCommands;
use crate::context::AppContext;

use fields::ProfileFlags;

/// Handle `slp account`.
pub async fn handle(
    action: &AccountCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        AccountCommands::Register {
            full_name,
            email,
            phone,
            city,
            country,
            bio,
        } => {
            let fields = ProfileFlags {
                full_name: full_name.clone(),
                email: email.clone(),
                phone: phone.clone(),
                city: city.clone(),
                country: country.clone(),
                bio: bio.clone(),
            };
            register::run(fields, ctx, flags).await
        }
        AccountCommands::Show => show::run(ctx, flags).await,
        AccountCommands::Update {
            full_name,
            email,
            phone,
            city,
            country,
            bio,
        } => {
            let fields = ProfileFlags {
                full_name: full_name.clone(),
                email: email.clone(),
                phone: phone.clone(),
                city: city.clone(),
                country: country.clone(),
                bio: bio.clone(),
            };
            update::run(fields, ctx, flags).await
        }
    }
}
