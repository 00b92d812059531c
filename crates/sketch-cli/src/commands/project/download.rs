use serde::Serialize;

use super::{check_index, open};
use crate::cli::GlobalFlags;
use crate::cli::subcommands::project::{ProjectDownloadArgs, ProjectDownloadImageArgs};
use crate::context::AppContext;
use crate::output::output;
use crate::progress::with_spinner;

#[derive(Debug, Serialize)]
struct DownloadResponse {
    project: String,
    path: String,
    index: Option<usize>,
}

/// Handle `sketch project download`.
pub async fn archive(
    args: &ProjectDownloadArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let session = open(ctx, &args.id).await?;
    let dir = ctx.output_dir(args.out.as_deref());

    let path = with_spinner(
        "downloading image archive",
        "archive downloaded",
        session.download_archive_to(&dir),
    )
    .await?;

    output(
        &DownloadResponse {
            project: args.id.clone(),
            path: path.display().to_string(),
            index: None,
        },
        flags.format,
    )
}

/// Handle `sketch project download-image`.
pub async fn single(
    args: &ProjectDownloadImageArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let session = open(ctx, &args.id).await?;
    let model = session.model();
    let index = check_index(model, args.index)?;
    if model.is_deleted(index) {
        tracing::warn!(index, "downloading an image that is marked deleted");
    }
    let url = model.image(index).unwrap_or_default().to_string();
    let dir = ctx.output_dir(args.out.as_deref());

    let path = with_spinner(
        "downloading image",
        "image downloaded",
        session.download_single(&url, index, &dir),
    )
    .await?;

    output(
        &DownloadResponse {
            project: args.id.clone(),
            path: path.display().to_string(),
            index: Some(index),
        },
        flags.format,
    )
}
