use clap::Subcommand;

/// Manuscript intake commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ManuscriptCommands {
    /// Record or merge intake detail for a project's manuscript.
    Set {
        project_id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        genre: Option<String>,
        #[arg(long)]
        word_count: Option<i64>,
        #[arg(long)]
        blurb: Option<String>,
        #[arg(long)]
        summary: Option<String>,
        /// Comparable published title (repeat for several).
        #[arg(long = "comp")]
        comps: Vec<String>,
        #[arg(long)]
        audience: Option<String>,
        #[arg(long)]
        author_name: Option<String>,
        #[arg(long)]
        author_bio: Option<String>,
        #[arg(long)]
        personalization: Option<String>,
        #[arg(long)]
        detail_summary: Option<String>,
        /// Letter tone: professional, warm-professional,
        /// literary-professional, tense-professional.
        #[arg(long)]
        tone: Option<String>,
    },
    /// Show a project's manuscript with its missing-field checklists.
    Show { project_id: String },
}
