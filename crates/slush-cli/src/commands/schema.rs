use anyhow::bail;
use schemars::schema_for;
use slush_core::entities::{LetterEvent, Manuscript, Message, Profile, Project, QueryLetter};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::output::output;

const ENTITY_NAMES: [&str; 6] = [
    "profile",
    "project",
    "manuscript",
    "letter",
    "letter_event",
    "message",
];

/// Handle `slp schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    match args.entity.as_deref() {
        Some(name) => {
            let Some(schema) = schema_by_name(name) else {
                bail!(
                    "unknown entity '{name}' (expected one of: {})",
                    ENTITY_NAMES.join(", ")
                );
            };
            output(&schema, flags.format)
        }
        None => {
            let mut schemas = serde_json::Map::new();
            for name in ENTITY_NAMES {
                if let Some(schema) = schema_by_name(name) {
                    schemas.insert(name.to_string(), serde_json::to_value(schema)?);
                }
            }
            output(&serde_json::Value::Object(schemas), flags.format)
        }
    }
}

fn schema_by_name(name: &str) -> Option<schemars::Schema> {
    let normalized = name.replace('-', "_");
    let schema = match normalized.as_str() {
        "profile" => schema_for!(Profile),
        "project" => schema_for!(Project),
        "manuscript" => schema_for!(Manuscript),
        "letter" | "query_letter" => schema_for!(QueryLetter),
        "letter_event" => schema_for!(LetterEvent),
        "message" => schema_for!(Message),
        _ => return None,
    };
    Some(schema)
}
