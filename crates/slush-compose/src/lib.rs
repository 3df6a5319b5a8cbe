//! # slush-compose
//!
//! Deterministic query letter composition and intake guidance.
//!
//! Everything here is a pure function over a [`Manuscript`](slush_core::entities::Manuscript):
//! the composer renders a complete query letter from recorded intake, and
//! the guidance module computes which intake fields are still missing and
//! phrases the assistant's next request for them. No network, no clock,
//! no randomness; identical input always renders the identical letter.

pub mod error;
pub mod guidance;
pub mod render;

pub use error::ComposeError;
pub use guidance::{IntakeField, guidance_reply, missing_compose_fields, missing_intake_fields};
pub use render::{ComposedLetter, compose_letter};
