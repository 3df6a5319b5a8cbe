//! Entity structs for all SlushPilot domain objects.
//!
//! Each entity maps to a table in the libSQL database. All structs derive
//! `Serialize`, `Deserialize`, and `JsonSchema` for JSON roundtrip and
//! `slp schema` output.

mod letter;
mod manuscript;
mod message;
mod profile;
mod project;

pub use letter::{LetterEvent, QueryLetter};
pub use manuscript::Manuscript;
pub use message::Message;
pub use profile::Profile;
pub use project::Project;
