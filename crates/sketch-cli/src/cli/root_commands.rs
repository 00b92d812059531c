use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::cli::subcommands::{AuthCommands, ProjectCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Authentication.
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
    /// List every project of the signed-in user.
    Projects,
    /// List the signed-in user's most recent projects.
    Recent,
    /// List stylization templates with their preview videos.
    Templates,
    /// Upload a video and submit it for stylization.
    Upload(UploadArgs),
    /// Inspect and curate one processed project.
    Project {
        #[command(subcommand)]
        action: ProjectCommands,
    },
}

/// Arguments for `sketch upload`.
#[derive(Clone, Debug, Args)]
pub struct UploadArgs {
    /// Video file to upload.
    pub video: PathBuf,
    /// Stylization template (hayao, shinkai, paprika, portrait-sketch, jp-face, none).
    #[arg(long)]
    pub style: Option<String>,
    /// SRT subtitle file to burn into the result.
    #[arg(long)]
    pub srt: Option<PathBuf>,
    /// Only store the raw video and print a presigned link to it.
    #[arg(long, conflicts_with = "srt")]
    pub raw_upload: bool,
}
