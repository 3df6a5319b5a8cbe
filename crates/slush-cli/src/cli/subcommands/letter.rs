use clap::Subcommand;

/// Query letter commands.
#[derive(Clone, Debug, Subcommand)]
pub enum LetterCommands {
    /// Create a letter; the body defaults to the composed letter.
    Create {
        project_id: String,
        #[arg(long)]
        publisher: String,
        #[arg(long)]
        body: Option<String>,
    },
    /// List a project's letters, most recent first.
    List {
        project_id: String,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Get a letter with its full draft/response history.
    Show { id: String },
    /// Replace the body of a letter still in drafting.
    Revise { id: String, body: String },
    /// Mark a letter sent to its publisher.
    Send { id: String },
    /// Record the publisher's response.
    Respond { id: String, response: String },
    /// Render a letter preview from the manuscript without writing rows.
    Compose {
        project_id: String,
        #[arg(long)]
        publisher: String,
    },
}
