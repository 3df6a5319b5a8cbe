//! ID prefix constants for database-generated entity IDs.
//!
//! IDs are generated as `{prefix}-{8 hex chars}` (see `SlushDb::generate_id`).
//! Profiles are keyed by username and carry no generated ID.

pub const PREFIX_PROJECT: &str = "prj";
pub const PREFIX_LETTER: &str = "ltr";
pub const PREFIX_LETTER_EVENT: &str = "evt";
pub const PREFIX_MESSAGE: &str = "msg";

/// All prefixes, for exhaustive format tests.
pub const ALL_PREFIXES: &[&str] = &[
    PREFIX_PROJECT,
    PREFIX_LETTER,
    PREFIX_LETTER_EVENT,
    PREFIX_MESSAGE,
];
