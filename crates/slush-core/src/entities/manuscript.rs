use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::LetterTone;

/// Intake details for a project's manuscript, filled in over time through
/// upserts. One row per project.
///
/// The pitch-profile fields (title, genre, word count, blurb, comps, target
/// audience) feed assistant guidance; the letter fields (summary, author name)
/// additionally gate letter composition.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Manuscript {
    pub project_id: String,
    pub title: Option<String>,
    pub genre: Option<String>,
    pub word_count: Option<i64>,
    pub blurb: Option<String>,
    pub summary: Option<String>,
    pub comparative_titles: Vec<String>,
    pub target_audience: Option<String>,
    pub author_name: Option<String>,
    pub author_bio: Option<String>,
    pub personalization_notes: Option<String>,
    pub detail_summary: Option<String>,
    pub tone: LetterTone,
    pub updated_at: DateTime<Utc>,
}

impl Manuscript {
    /// An empty intake for a project, used as the upsert base when no row
    /// exists yet.
    #[must_use]
    pub fn empty(project_id: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            project_id: project_id.into(),
            title: None,
            genre: None,
            word_count: None,
            blurb: None,
            summary: None,
            comparative_titles: Vec::new(),
            target_audience: None,
            author_name: None,
            author_bio: None,
            personalization_notes: None,
            detail_summary: None,
            tone: LetterTone::default(),
            updated_at: now,
        }
    }
}
