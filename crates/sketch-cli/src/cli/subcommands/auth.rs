use clap::{Args, Subcommand};

/// Authentication commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AuthCommands {
    /// Exchange email and password for an access token.
    Login(AuthLoginArgs),
    /// Clear stored credentials.
    Logout,
    /// Show current auth status.
    Status,
}

#[derive(Clone, Debug, Args)]
pub struct AuthLoginArgs {
    /// Account email (defaults to `auth.email` from config).
    #[arg(long)]
    pub email: Option<String>,
    /// Password. Read from `SKETCH_PASSWORD` or stdin when omitted.
    #[arg(long)]
    pub password: Option<String>,
}
