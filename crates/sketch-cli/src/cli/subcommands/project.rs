use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

/// Project curation commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ProjectCommands {
    /// Show one view of the project's images.
    Show(ProjectShowArgs),
    /// Apply deletions, restorations and favorites, optionally saving.
    Curate(ProjectCurateArgs),
    /// Download the server-built image archive.
    Download(ProjectDownloadArgs),
    /// Download a single image.
    DownloadImage(ProjectDownloadImageArgs),
    /// Interactive curation session.
    Edit(ProjectEditArgs),
}

/// Which derived view of the image list to show.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum ProjectView {
    #[default]
    Active,
    Deleted,
    Favorites,
}

#[derive(Clone, Debug, Args)]
pub struct ProjectShowArgs {
    pub id: String,
    #[arg(long, value_enum, default_value_t = ProjectView::Active)]
    pub view: ProjectView,
}

#[derive(Clone, Debug, Args)]
pub struct ProjectCurateArgs {
    pub id: String,
    /// Image positions to soft-delete.
    #[arg(long, value_delimiter = ',')]
    pub delete: Vec<usize>,
    /// Image positions to restore.
    #[arg(long, value_delimiter = ',')]
    pub restore: Vec<usize>,
    /// Image positions whose favorite flag is toggled.
    #[arg(long, value_delimiter = ',')]
    pub favorite: Vec<usize>,
    /// Image position to select.
    #[arg(long)]
    pub select: Option<usize>,
    /// Push the resulting state to the backend.
    #[arg(long)]
    pub save: bool,
}

#[derive(Clone, Debug, Args)]
pub struct ProjectDownloadArgs {
    pub id: String,
    /// Output directory (defaults to `general.download_dir`).
    #[arg(long)]
    pub out: Option<PathBuf>,
}

#[derive(Clone, Debug, Args)]
pub struct ProjectDownloadImageArgs {
    pub id: String,
    /// Original 0-based image position.
    pub index: usize,
    #[arg(long)]
    pub out: Option<PathBuf>,
}

#[derive(Clone, Debug, Args)]
pub struct ProjectEditArgs {
    pub id: String,
    #[arg(long)]
    pub out: Option<PathBuf>,
}
