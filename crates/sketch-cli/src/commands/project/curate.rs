use serde::Serialize;
use sketch_curation::CurationModel;

use super::{check_index, open};
use crate::cli::GlobalFlags;
use crate::cli::subcommands::project::ProjectCurateArgs;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::with_spinner;

#[derive(Debug, Serialize)]
struct ProjectCurateResponse {
    project: String,
    deleted: Vec<usize>,
    favorites: Vec<usize>,
    selected: usize,
    displayed: Option<usize>,
    saved: bool,
    ack: Option<serde_json::Value>,
}

pub async fn run(
    args: &ProjectCurateArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let mut session = open(ctx, &args.id).await?;
    apply(session.model_mut(), args)?;

    let ack = if args.save {
        Some(with_spinner("saving project state", "project saved", session.save()).await?)
    } else {
        tracing::warn!(project = %args.id, "changes not saved; pass --save to push them");
        None
    };

    let model = session.model();
    output(
        &ProjectCurateResponse {
            project: args.id.clone(),
            deleted: model.deleted().iter().copied().collect(),
            favorites: model.favorites().iter().copied().collect(),
            selected: model.selected(),
            displayed: model.displayed().map(|image| image.index),
            saved: ack.is_some(),
            ack,
        },
        flags.format,
    )
}

/// Validate every index first, then apply deletes, restores, favorite toggles
/// and the selection in that order.
fn apply(model: &mut CurationModel, args: &ProjectCurateArgs) -> anyhow::Result<()> {
    for &index in args
        .delete
        .iter()
        .chain(&args.restore)
        .chain(&args.favorite)
        .chain(args.select.as_ref())
    {
        check_index(model, index)?;
    }

    for &index in &args.delete {
        model.mark_deleted(index);
    }
    for &index in &args.restore {
        model.restore(index);
    }
    for &index in &args.favorite {
        model.toggle_favorite(index);
    }
    if let Some(index) = args.select {
        model.select(index);
    }
    Ok(())
}
