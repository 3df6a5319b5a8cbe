use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{LetterEventKind, LetterStatus};

/// A pitch document addressed to one publisher. `body` holds the current
/// draft; prior drafts and publisher responses live in `LetterEvent` rows.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct QueryLetter {
    pub id: String,
    pub project_id: String,
    pub publisher_name: String,
    pub body: String,
    pub status: LetterStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One append-only history entry for a letter: a draft revision or a
/// publisher response. Ordered by the per-letter `seq` counter, not by
/// creation time.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct LetterEvent {
    pub id: String,
    pub letter_id: String,
    pub kind: LetterEventKind,
    pub seq: i64,
    pub body: String,
    pub created_at: DateTime<Utc>,
}
