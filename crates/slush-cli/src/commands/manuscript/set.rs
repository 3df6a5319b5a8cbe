use serde::Serialize;
use slush_core::entities::Manuscript;
use slush_core::enums::LetterTone;
use slush_db::updates::manuscript::{ManuscriptIntake, ManuscriptIntakeBuilder};

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

/// Intake field flags for `manuscript set`. Absent flags leave the stored
/// value alone; the merge happens in the upsert.
#[derive(Debug, Default)]
pub struct IntakeFlags {
    pub title: Option<String>,
    pub genre: Option<String>,
    pub word_count: Option<i64>,
    pub blurb: Option<String>,
    pub summary: Option<String>,
    pub comps: Vec<String>,
    pub audience: Option<String>,
    pub author_name: Option<String>,
    pub author_bio: Option<String>,
    pub personalization: Option<String>,
    pub detail_summary: Option<String>,
    pub tone: Option<String>,
}

impl IntakeFlags {
    fn into_intake(self) -> anyhow::Result<ManuscriptIntake> {
        let mut builder = ManuscriptIntakeBuilder::new();
        if let Some(value) = self.title {
            builder = builder.title(value);
        }
        if let Some(value) = self.genre {
            builder = builder.genre(value);
        }
        if let Some(value) = self.word_count {
            builder = builder.word_count(value);
        }
        if let Some(value) = self.blurb {
            builder = builder.blurb(value);
        }
        if let Some(value) = self.summary {
            builder = builder.summary(value);
        }
        if !self.comps.is_empty() {
            let comps = self
                .comps
                .iter()
                .map(|comp| comp.trim().to_string())
                .filter(|comp| !comp.is_empty())
                .collect();
            builder = builder.comparative_titles(comps);
        }
        if let Some(value) = self.audience {
            builder = builder.target_audience(value);
        }
        if let Some(value) = self.author_name {
            builder = builder.author_name(value);
        }
        if let Some(value) = self.author_bio {
            builder = builder.author_bio(set_or_clear(value));
        }
        if let Some(value) = self.personalization {
            builder = builder.personalization_notes(set_or_clear(value));
        }
        if let Some(value) = self.detail_summary {
            builder = builder.detail_summary(set_or_clear(value));
        }
        if let Some(raw) = self.tone {
            let tone: LetterTone = parse_enum(&raw, "tone")?;
            builder = builder.tone(tone);
        }
        Ok(builder.build())
    }
}

fn set_or_clear(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}

#[derive(Debug, Serialize)]
struct ManuscriptResponse {
    manuscript: Manuscript,
}

pub async fn run(
    project_id: &str,
    fields: IntakeFlags,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let intake = fields.into_intake()?;
    let manuscript = ctx.service.upsert_manuscript(project_id, intake).await?;
    output(&ManuscriptResponse { manuscript }, flags.format)
}

#[cfg(test)]
mod tests {
    use slush_core::enums::LetterTone;

    use super::IntakeFlags;

    #[test]
    fn absent_flags_build_empty_intake() {
        let intake = IntakeFlags::default()
            .into_intake()
            .expect("intake should build");
        assert!(intake.title.is_none());
        assert!(intake.comparative_titles.is_none());
        assert!(intake.tone.is_none());
    }

    #[test]
    fn comps_are_trimmed_and_empty_entries_dropped() {
        let fields = IntakeFlags {
            comps: vec![
                "  Piranesi ".to_string(),
                String::new(),
                "The Starless Sea".to_string(),
            ],
            ..Default::default()
        };
        let intake = fields.into_intake().expect("intake should build");
        assert_eq!(
            intake.comparative_titles,
            Some(vec![
                "Piranesi".to_string(),
                "The Starless Sea".to_string()
            ])
        );
    }

    #[test]
    fn tone_flag_accepts_hyphenated_value() {
        let fields = IntakeFlags {
            tone: Some("warm-professional".to_string()),
            ..Default::default()
        };
        let intake = fields.into_intake().expect("intake should build");
        assert_eq!(intake.tone, Some(LetterTone::WarmProfessional));
    }

    #[test]
    fn invalid_tone_is_an_error() {
        let fields = IntakeFlags {
            tone: Some("chatty".to_string()),
            ..Default::default()
        };
        let err = fields.into_intake().expect_err("tone should be rejected");
        assert!(err.to_string().contains("invalid tone 'chatty'"));
    }

    #[test]
    fn empty_string_clears_letter_extras() {
        let fields = IntakeFlags {
            author_bio: Some(String::new()),
            detail_summary: Some("a longer synopsis".to_string()),
            ..Default::default()
        };
        let intake = fields.into_intake().expect("intake should build");
        assert_eq!(intake.author_bio, Some(None));
        assert_eq!(
            intake.detail_summary,
            Some(Some("a longer synopsis".to_string()))
        );
    }
}
