use clap::{Args, Subcommand};

use crate::cli::subcommands::{
    AccountCommands, LetterCommands, ManuscriptCommands, MessageCommands, ProjectCommands,
};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Acting account profile.
    Account {
        #[command(subcommand)]
        action: AccountCommands,
    },
    /// Book projects.
    Project {
        #[command(subcommand)]
        action: ProjectCommands,
    },
    /// Manuscript intake per project.
    Manuscript {
        #[command(subcommand)]
        action: ManuscriptCommands,
    },
    /// Guidance conversation per project.
    Message {
        #[command(subcommand)]
        action: MessageCommands,
    },
    /// Query letters and their submission lifecycle.
    Letter {
        #[command(subcommand)]
        action: LetterCommands,
    },
    /// Dump JSON schema for the public entity types.
    Schema(SchemaArgs),
}

/// Arguments for `slp schema`.
#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Entity name (profile, project, manuscript, letter, letter-event,
    /// message). Omit to list all schemas.
    pub entity: Option<String>,
}
