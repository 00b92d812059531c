mod curate;
mod download;
mod edit;
mod show;

use serde::Serialize;
use sketch_core::entities::ProjectId;
use sketch_curation::{CurationModel, CurationSession, ImageRef};
use sketch_gateway::HttpGateway;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ProjectCommands;
use crate::context::AppContext;
use crate::progress::with_spinner;

/// Handle `sketch project <subcommand>`.
pub async fn handle(
    action: &ProjectCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ProjectCommands::Show(args) => show::run(args, ctx, flags).await,
        ProjectCommands::Curate(args) => curate::run(args, ctx, flags).await,
        ProjectCommands::Download(args) => download::archive(args, ctx, flags).await,
        ProjectCommands::DownloadImage(args) => download::single(args, ctx, flags).await,
        ProjectCommands::Edit(args) => edit::run(args, ctx).await,
    }
}

async fn open(ctx: &AppContext, id: &str) -> anyhow::Result<CurationSession<HttpGateway>> {
    let session = with_spinner(
        "loading project",
        "project loaded",
        CurationSession::load(ctx.gateway.clone(), ProjectId::from(id)),
    )
    .await?;
    tracing::debug!(
        project = id,
        images = session.model().len(),
        deleted = session.model().deleted_count(),
        "curation session opened"
    );
    Ok(session)
}

/// Reject positions outside the image list before they reach the model.
fn check_index(model: &CurationModel, index: usize) -> anyhow::Result<usize> {
    if index >= model.len() {
        anyhow::bail!(
            "image index {index} out of range (project has {} images)",
            model.len()
        );
    }
    Ok(index)
}

/// One image as listed by `show`, `curate` and the editor.
#[derive(Debug, Serialize)]
struct ImageRow {
    index: usize,
    state: &'static str,
    favorite: bool,
    url: String,
}

impl ImageRow {
    fn new(model: &CurationModel, image: ImageRef<'_>) -> Self {
        Self {
            index: image.index,
            state: if model.is_deleted(image.index) {
                "deleted"
            } else {
                "active"
            },
            favorite: model.is_favorite(image.index),
            url: image.url.to_string(),
        }
    }
}
