//! Composition error types.

use thiserror::Error;

use crate::guidance::IntakeField;

/// Errors from letter composition.
#[derive(Debug, Error)]
pub enum ComposeError {
    /// Required intake fields are absent; the letter cannot be rendered.
    #[error("Cannot compose letter, missing required fields: {}", format_fields(.0))]
    MissingFields(Vec<IntakeField>),
}

fn format_fields(fields: &[IntakeField]) -> String {
    fields
        .iter()
        .map(IntakeField::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
