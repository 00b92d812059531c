use serde::Serialize;

use super::{ImageRow, open};
use crate::cli::GlobalFlags;
use crate::cli::subcommands::ProjectView;
use crate::cli::subcommands::project::ProjectShowArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ProjectShowResponse {
    project: String,
    view: &'static str,
    total: usize,
    active: usize,
    deleted: usize,
    favorites: usize,
    images: Vec<ImageRow>,
}

pub async fn run(
    args: &ProjectShowArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let session = open(ctx, &args.id).await?;
    let model = session.model();

    let (view, images) = match args.view {
        ProjectView::Active => ("active", model.active_view()),
        ProjectView::Deleted => ("deleted", model.deleted_view()),
        ProjectView::Favorites => ("favorites", model.favorites_view()),
    };

    output(
        &ProjectShowResponse {
            project: session.project_id().to_string(),
            view,
            total: model.len(),
            active: model.active_count(),
            deleted: model.deleted_count(),
            favorites: model.favorite_count(),
            images: images.map(|image| ImageRow::new(model, image)).collect(),
        },
        flags.format,
    )
}
