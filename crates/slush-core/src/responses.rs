//! Shared response types returned as JSON by `slp` commands.
//!
//! Command-specific response shapes live next to their handlers in the CLI
//! crate; the types here are reused across more than one command.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{LetterEvent, Project, QueryLetter};

/// A project together with the counts the stage resolver runs on.
/// Returned by `slp project show` and `slp project refresh`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ProjectOverview {
    pub project: Project,
    pub message_count: i64,
    pub letter_count: i64,
}

/// A letter with its full append-only history, oldest first.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct LetterWithHistory {
    pub letter: QueryLetter,
    pub history: Vec<LetterEvent>,
}
