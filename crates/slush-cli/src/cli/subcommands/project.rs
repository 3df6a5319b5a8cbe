use clap::Subcommand;

/// Project entity commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ProjectCommands {
    /// Create a project.
    Create {
        #[arg(long)]
        title: Option<String>,
    },
    /// List the acting account's projects, most recently updated first.
    List {
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Get a project with its related counts.
    Show { id: String },
    /// Rename a project.
    Rename { id: String, title: String },
    /// Make a project publicly listed.
    Publish { id: String },
    /// Make a project private again.
    Unpublish { id: String },
    /// Re-run the stage resolver against the current counts.
    Refresh { id: String },
}
