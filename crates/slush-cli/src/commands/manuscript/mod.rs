mod set;
mod show;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ManuscriptCommands;
use crate::context::AppContext;

use set::IntakeFlags;

/// Handle `slp manuscript`.
pub async fn handle(
    action: &ManuscriptCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ManuscriptCommands::Set {
            project_id,
            title,
            genre,
            word_count,
            blurb,
            summary,
            comps,
            audience,
            author_name,
            author_bio,
            personalization,
            detail_summary,
            tone,
        } => {
            let fields = IntakeFlags {
                title: title.clone(),
                genre: genre.clone(),
                word_count: *word_count,
                blurb: blurb.clone(),
                summary: summary.clone(),
                comps: comps.clone(),
                audience: audience.clone(),
                author_name: author_name.clone(),
                author_bio: author_bio.clone(),
                personalization: personalization.clone(),
                detail_summary: detail_summary.clone(),
                tone: tone.clone(),
            };
            set::run(project_id, fields, ctx, flags).await
        }
        ManuscriptCommands::Show { project_id } => show::run(project_id, ctx, flags).await,
    }
}
