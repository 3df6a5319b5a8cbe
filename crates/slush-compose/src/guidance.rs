//! Intake checklists and the deterministic assistant reply.
//!
//! Two checklists run over a manuscript (possibly absent): the pitch
//! profile (what guidance asks for first) and the composer's required
//! fields. `guidance_reply` turns the outstanding union of both into the
//! assistant message appended after every user message.

use serde::{Deserialize, Serialize};
use slush_core::entities::Manuscript;

/// An intake field the guidance flow can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntakeField {
    Title,
    Genre,
    WordCount,
    Blurb,
    ComparativeTitles,
    TargetAudience,
    Summary,
    AuthorName,
}

impl IntakeField {
    /// Snake_case field name, as stored and as shown in error messages.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Genre => "genre",
            Self::WordCount => "word_count",
            Self::Blurb => "blurb",
            Self::ComparativeTitles => "comparative_titles",
            Self::TargetAudience => "target_audience",
            Self::Summary => "summary",
            Self::AuthorName => "author_name",
        }
    }

    /// The human phrasing used when asking the author for this field.
    #[must_use]
    pub const fn hint(&self) -> &'static str {
        match self {
            Self::Title => "the book title",
            Self::Genre => "the genre",
            Self::WordCount => "the approximate word count",
            Self::Blurb => "a short blurb (1-3 sentences)",
            Self::ComparativeTitles => "2-3 comparable published titles",
            Self::TargetAudience => "the target readers (age range/interests)",
            Self::Summary => "a fuller summary of the story",
            Self::AuthorName => "the author name",
        }
    }

    fn is_present(self, manuscript: &Manuscript) -> bool {
        match self {
            Self::Title => manuscript.title.is_some(),
            Self::Genre => manuscript.genre.is_some(),
            Self::WordCount => matches!(manuscript.word_count, Some(n) if n > 0),
            Self::Blurb => manuscript.blurb.is_some(),
            Self::ComparativeTitles => !manuscript.comparative_titles.is_empty(),
            Self::TargetAudience => manuscript.target_audience.is_some(),
            Self::Summary => manuscript.summary.is_some(),
            Self::AuthorName => manuscript.author_name.is_some(),
        }
    }
}

impl std::fmt::Display for IntakeField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The pitch-profile checklist, in asking order.
const INTAKE_FIELDS: &[IntakeField] = &[
    IntakeField::Title,
    IntakeField::Genre,
    IntakeField::WordCount,
    IntakeField::Blurb,
    IntakeField::ComparativeTitles,
    IntakeField::TargetAudience,
];

/// The composer's required fields, in asking order.
const COMPOSE_FIELDS: &[IntakeField] = &[
    IntakeField::Title,
    IntakeField::Genre,
    IntakeField::WordCount,
    IntakeField::Summary,
    IntakeField::AuthorName,
];

fn missing_from(checklist: &[IntakeField], manuscript: Option<&Manuscript>) -> Vec<IntakeField> {
    match manuscript {
        Some(m) => checklist
            .iter()
            .copied()
            .filter(|field| !field.is_present(m))
            .collect(),
        None => checklist.to_vec(),
    }
}

/// Pitch-profile fields not yet recorded. An absent manuscript misses all
/// of them.
#[must_use]
pub fn missing_intake_fields(manuscript: Option<&Manuscript>) -> Vec<IntakeField> {
    missing_from(INTAKE_FIELDS, manuscript)
}

/// Composer-required fields not yet recorded.
#[must_use]
pub fn missing_compose_fields(manuscript: Option<&Manuscript>) -> Vec<IntakeField> {
    missing_from(COMPOSE_FIELDS, manuscript)
}

/// Everything guidance still wants: the pitch profile plus the composer
/// extras, deduplicated in asking order.
fn missing_guidance_fields(manuscript: Option<&Manuscript>) -> Vec<IntakeField> {
    let mut fields = missing_intake_fields(manuscript);
    for field in missing_compose_fields(manuscript) {
        if !fields.contains(&field) {
            fields.push(field);
        }
    }
    fields
}

/// The deterministic assistant reply to an author message.
///
/// Lists the outstanding intake hints (inline for up to 4, bulleted
/// beyond that); once everything is on file, confirms that letter
/// drafting can begin.
#[must_use]
pub fn guidance_reply(manuscript: Option<&Manuscript>) -> String {
    let missing = missing_guidance_fields(manuscript);
    if missing.is_empty() {
        return "Your intake is complete. I have everything needed to draft query letters; \
                pick a publisher and create your first letter when you're ready."
            .to_string();
    }

    let hints: Vec<&str> = missing.iter().map(IntakeField::hint).collect();
    if hints.len() <= 4 {
        format!(
            "Thanks for the details. To finish your intake, could you share {}?",
            crate::render::join_natural(&hints)
        )
    } else {
        let mut reply =
            String::from("Thanks for the details. To finish your intake, could you share:");
        for hint in hints {
            reply.push_str("\n- ");
            reply.push_str(hint);
        }
        reply
    }
}
