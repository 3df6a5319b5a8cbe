use clap::Subcommand;

/// Account profile commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AccountCommands {
    /// Sign up the acting username.
    Register {
        #[arg(long)]
        full_name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        city: Option<String>,
        #[arg(long)]
        country: Option<String>,
        #[arg(long)]
        bio: Option<String>,
    },
    /// Show the acting account's profile.
    Show,
    /// Update profile fields. Pass an empty string to clear a field.
    Update {
        #[arg(long)]
        full_name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        city: Option<String>,
        #[arg(long)]
        country: Option<String>,
        #[arg(long)]
        bio: Option<String>,
    },
}
