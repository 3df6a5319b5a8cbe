mod account;
mod letter;
mod manuscript;
mod message;
mod project;

pub use account::AccountCommands;
pub use letter::LetterCommands;
pub use manuscript::ManuscriptCommands;
pub use message::MessageCommands;
pub use project::ProjectCommands;
