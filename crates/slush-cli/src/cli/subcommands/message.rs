use clap::Subcommand;

/// Guidance conversation commands.
#[derive(Clone, Debug, Subcommand)]
pub enum MessageCommands {
    /// Send a message; the deterministic guidance reply is appended after it.
    Send { project_id: String, text: String },
    /// List a project's messages in order.
    List {
        project_id: String,
        #[arg(long)]
        limit: Option<u32>,
    },
}
