//! Manuscript intake builder.
//!
//! Intake arrives piecemeal (an author rarely has everything on day one), so
//! every field is optional. Core pitch fields use plain `Option`: setting them
//! to an empty value makes no sense, only overwriting does. The free-form
//! letter extras (`author_bio`, `personalization_notes`, `detail_summary`)
//! are `Option<Option<String>>` so they can also be cleared.

use serde::Serialize;
use slush_core::entities::Manuscript;
use slush_core::enums::LetterTone;

#[derive(Debug, Clone, Default, Serialize)]
pub struct ManuscriptIntake {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blurb: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparative_titles: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_audience: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_bio: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub personalization_notes: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail_summary: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tone: Option<LetterTone>,
}

impl ManuscriptIntake {
    /// Merge this intake over a stored manuscript, returning the merged row.
    ///
    /// Fields left `None` keep their stored value; the caller stamps
    /// `updated_at`.
    #[must_use]
    pub fn apply(self, base: Manuscript) -> Manuscript {
        Manuscript {
            project_id: base.project_id,
            title: self.title.or(base.title),
            genre: self.genre.or(base.genre),
            word_count: self.word_count.or(base.word_count),
            blurb: self.blurb.or(base.blurb),
            summary: self.summary.or(base.summary),
            comparative_titles: self
                .comparative_titles
                .unwrap_or(base.comparative_titles),
            target_audience: self.target_audience.or(base.target_audience),
            author_name: self.author_name.or(base.author_name),
            author_bio: self.author_bio.unwrap_or(base.author_bio),
            personalization_notes: self
                .personalization_notes
                .unwrap_or(base.personalization_notes),
            detail_summary: self.detail_summary.unwrap_or(base.detail_summary),
            tone: self.tone.unwrap_or(base.tone),
            updated_at: base.updated_at,
        }
    }
}

pub struct ManuscriptIntakeBuilder(ManuscriptIntake);

impl ManuscriptIntakeBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(ManuscriptIntake::default())
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.0.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn genre(mut self, genre: impl Into<String>) -> Self {
        self.0.genre = Some(genre.into());
        self
    }

    #[must_use]
    pub const fn word_count(mut self, word_count: i64) -> Self {
        self.0.word_count = Some(word_count);
        self
    }

    #[must_use]
    pub fn blurb(mut self, blurb: impl Into<String>) -> Self {
        self.0.blurb = Some(blurb.into());
        self
    }

    #[must_use]
    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.0.summary = Some(summary.into());
        self
    }

    #[must_use]
    pub fn comparative_titles(mut self, titles: Vec<String>) -> Self {
        self.0.comparative_titles = Some(titles);
        self
    }

    #[must_use]
    pub fn target_audience(mut self, audience: impl Into<String>) -> Self {
        self.0.target_audience = Some(audience.into());
        self
    }

    #[must_use]
    pub fn author_name(mut self, name: impl Into<String>) -> Self {
        self.0.author_name = Some(name.into());
        self
    }

    #[must_use]
    pub fn author_bio(mut self, bio: Option<String>) -> Self {
        self.0.author_bio = Some(bio);
        self
    }

    #[must_use]
    pub fn personalization_notes(mut self, notes: Option<String>) -> Self {
        self.0.personalization_notes = Some(notes);
        self
    }

    #[must_use]
    pub fn detail_summary(mut self, detail: Option<String>) -> Self {
        self.0.detail_summary = Some(detail);
        self
    }

    #[must_use]
    pub const fn tone(mut self, tone: LetterTone) -> Self {
        self.0.tone = Some(tone);
        self
    }

    #[must_use]
    pub fn build(self) -> ManuscriptIntake {
        self.0
    }
}

impl Default for ManuscriptIntakeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use pretty_assertions::assert_eq;

    #[test]
    fn apply_overwrites_only_set_fields() {
        let now = Utc::now();
        let mut base = Manuscript::empty("prj-t1", now);
        base.title = Some("Old Title".to_string());
        base.genre = Some("fantasy".to_string());

        let intake = ManuscriptIntakeBuilder::new()
            .title("New Title")
            .word_count(92_000)
            .build();

        let merged = intake.apply(base);
        assert_eq!(merged.title.as_deref(), Some("New Title"));
        assert_eq!(merged.genre.as_deref(), Some("fantasy"));
        assert_eq!(merged.word_count, Some(92_000));
    }

    #[test]
    fn apply_can_clear_letter_extras() {
        let now = Utc::now();
        let mut base = Manuscript::empty("prj-t1", now);
        base.author_bio = Some("Debut novelist from Leeds.".to_string());

        let intake = ManuscriptIntakeBuilder::new().author_bio(None).build();
        let merged = intake.apply(base);
        assert_eq!(merged.author_bio, None);
    }

    #[test]
    fn empty_intake_is_identity() {
        let now = Utc::now();
        let mut base = Manuscript::empty("prj-t1", now);
        base.title = Some("Kept".to_string());
        base.comparative_titles = vec!["Piranesi".to_string()];

        let merged = ManuscriptIntake::default().apply(base.clone());
        assert_eq!(merged, base);
    }
}
