use serde::Serialize;
use sketch_core::entities::{ProjectSummary, StyleTemplate, UserProfile};

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::with_spinner;

#[derive(Debug, Serialize)]
struct ProjectRow {
    id: String,
    name: String,
    created_at: String,
    video_url: Option<String>,
    frames_url: Option<String>,
}

impl From<ProjectSummary> for ProjectRow {
    fn from(project: ProjectSummary) -> Self {
        // Normalize parseable timestamps; keep the backend's text otherwise.
        let created_at = project.created_at_utc().map_or_else(
            || project.created_at.clone(),
            |ts| ts.format("%Y-%m-%d %H:%M").to_string(),
        );
        Self {
            id: project.id,
            name: project.name,
            created_at,
            video_url: project.video_download_url,
            frames_url: project.frames_download_url,
        }
    }
}

#[derive(Debug, Serialize)]
struct TemplateRow {
    template: StyleTemplate,
    description: &'static str,
    preview_url: Option<String>,
}

/// Handle `sketch projects`.
pub async fn projects(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let email = ctx.require_session()?.email.clone();
    let profile = with_spinner(
        "fetching projects",
        "projects loaded",
        ctx.gateway.fetch_user_data(&email),
    )
    .await?;
    output(&rows(profile), flags.format)
}

/// Handle `sketch recent`.
pub async fn recent(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let email = ctx.require_session()?.email.clone();
    let profile = with_spinner(
        "fetching recent projects",
        "recent projects loaded",
        ctx.gateway.fetch_recent(&email),
    )
    .await?;
    output(&rows(profile), flags.format)
}

/// Handle `sketch templates`.
///
/// Every known template is listed; the preview is empty when the backend has
/// no asset for it.
pub async fn templates(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut previews = with_spinner(
        "fetching template previews",
        "templates loaded",
        ctx.gateway.fetch_assets(),
    )
    .await?;

    let rows = StyleTemplate::ALL
        .into_iter()
        .map(|template| TemplateRow {
            template,
            description: template.description(),
            preview_url: previews.remove(&template),
        })
        .collect::<Vec<_>>();
    output(&rows, flags.format)
}

fn rows(profile: UserProfile) -> Vec<ProjectRow> {
    profile.projects.into_iter().map(ProjectRow::from).collect()
}
