use anyhow::Context;
use serde::Serialize;
use sketch_core::entities::StyleTemplate;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::UploadArgs;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::with_spinner;

#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum UploadResponse {
    /// `--raw-upload`: the stored video, not processed.
    Raw {
        template: StyleTemplate,
        presigned_url: String,
    },
    Processed {
        template: StyleTemplate,
        download_url: String,
        video_object_name: String,
        subtitles: bool,
    },
}

/// Handle `sketch upload`.
pub async fn handle(
    args: &UploadArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let template = resolve_template(args.style.as_deref(), ctx.config.general.default_style)?;
    if !args.video.is_file() {
        anyhow::bail!("upload: '{}' is not a file", args.video.display());
    }

    let response = if args.raw_upload {
        let presigned_url = with_spinner(
            "uploading video",
            "video uploaded",
            ctx.gateway.upload_file(&args.video, template),
        )
        .await?;
        UploadResponse::Raw {
            template,
            presigned_url,
        }
    } else {
        let email = ctx.require_session()?.email.clone();
        let processed = with_spinner(
            "processing video",
            "video processed",
            ctx.gateway
                .process_video(&args.video, template, &email, args.srt.as_deref()),
        )
        .await?;
        tracing::info!(object = %processed.video_object_name, %template, "video processed");
        UploadResponse::Processed {
            template,
            download_url: processed.download_url,
            video_object_name: processed.video_object_name,
            subtitles: args.srt.is_some(),
        }
    };

    output(&response, flags.format)
}

fn resolve_template(style: Option<&str>, default: StyleTemplate) -> anyhow::Result<StyleTemplate> {
    style.map_or(Ok(default), |raw| {
        raw.parse::<StyleTemplate>()
            .with_context(|| format!("valid styles: {}", names()))
    })
}

fn names() -> String {
    StyleTemplate::ALL
        .iter()
        .map(|template| template.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
