//! Video upload, processing submission, and raw downloads.

use std::path::Path;

use reqwest::multipart::{Form, Part};
use sketch_core::entities::{ProcessedVideo, StyleTemplate};

use crate::http::{check_response, decode_json};
use crate::wire::{PresignedUrlResponse, ProcessResponse, ProcessSrtResponse, UploadResponse};
use crate::{GatewayError, HttpGateway};

const UPLOAD_PATH: &str = "/uploadfile/";
const PRESIGNED_PATH: &str = "/get_presigned_url/";
const PROCESS_PATH: &str = "/process_and_upload_video/";
const PROCESS_SRT_PATH: &str = "/process_and_upload_video_srt/";

impl HttpGateway {
    /// Upload a raw video tagged with the template's model path and return a
    /// presigned URL for the stored object.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Io`] if the video cannot be read, otherwise
    /// any transport, status, or schema error from either request.
    pub async fn upload_file(
        &self,
        video: &Path,
        template: StyleTemplate,
    ) -> Result<String, GatewayError> {
        let form = Form::new()
            .part("file", video_part(video).await?)
            .text("type", template.model_path());

        tracing::debug!(video = %video.display(), %template, "uploading video");
        let resp = check_response(self.post(UPLOAD_PATH).multipart(form).send().await?).await?;
        let uploaded: UploadResponse = decode_json(resp, UPLOAD_PATH).await?;

        let path = format!(
            "{PRESIGNED_PATH}?file_name={}",
            urlencoding::encode(&uploaded.object_name)
        );
        let resp = check_response(self.get(&path).send().await?).await?;
        let presigned: PresignedUrlResponse = decode_json(resp, PRESIGNED_PATH).await?;
        Ok(presigned.url)
    }

    /// Submit a video for stylization, optionally with an SRT subtitle file.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Io`] if an input file cannot be read, otherwise
    /// any transport, status, or schema error from the request.
    pub async fn process_video(
        &self,
        video: &Path,
        template: StyleTemplate,
        email: &str,
        subtitles: Option<&Path>,
    ) -> Result<ProcessedVideo, GatewayError> {
        let mut form = Form::new().part("video_file", video_part(video).await?);
        if let Some(srt) = subtitles {
            let bytes = read_file(srt).await?;
            let part = Part::bytes(bytes)
                .file_name("subtitles.srt")
                .mime_str("application/x-subrip")?;
            form = form.part("srt_file", part);
        }
        let form = form
            .text("type", template.as_str())
            .text("email", email.to_string());

        let path = if subtitles.is_some() {
            PROCESS_SRT_PATH
        } else {
            PROCESS_PATH
        };
        tracing::debug!(video = %video.display(), %template, endpoint = path, "submitting video");

        let resp = check_response(self.post(path).multipart(form).send().await?).await?;
        if subtitles.is_some() {
            let body: ProcessSrtResponse = decode_json(resp, path).await?;
            Ok(body.into())
        } else {
            let body: ProcessResponse = decode_json(resp, path).await?;
            Ok(body.into())
        }
    }

    /// Plain GET of an absolute URL (presigned image links carry their own
    /// credentials, so no bearer token is attached).
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] for transport failures or non-success status.
    pub async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, GatewayError> {
        let resp = check_response(self.http.get(url).send().await?).await?;
        Ok(resp.bytes().await?.to_vec())
    }
}

async fn video_part(path: &Path) -> Result<Part, GatewayError> {
    let bytes = read_file(path).await?;
    Ok(Part::bytes(bytes)
        .file_name("video.mp4")
        .mime_str("video/mp4")?)
}

async fn read_file(path: &Path) -> Result<Vec<u8>, GatewayError> {
    tokio::fs::read(path).await.map_err(|source| GatewayError::Io {
        path: path.display().to_string(),
        source,
    })
}
