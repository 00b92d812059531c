//! Project snapshot endpoints.

use sketch_core::entities::{ProjectId, ProjectSnapshot};

use crate::http::{check_response, decode_json};
use crate::wire::{ProjectResponse, SaveProjectState};
use crate::{GatewayError, HttpGateway, ProjectGateway};

const SAVE_PATH: &str = "/save_project_state";

impl ProjectGateway for HttpGateway {
    async fn fetch_project(&self, project_id: &ProjectId) -> Result<ProjectSnapshot, GatewayError> {
        let path = format!("/get_project/{}", urlencoding::encode(project_id.as_str()));
        tracing::debug!(project = %project_id, "fetching project");

        let resp = check_response(self.get(&path).send().await?).await?;
        let body: ProjectResponse = decode_json(resp, &path).await?;
        let snapshot = body.into_snapshot(&path)?;

        tracing::debug!(
            project = %project_id,
            images = snapshot.images.len(),
            deleted = snapshot.deleted.len(),
            favorites = snapshot.favorites.len(),
            "project loaded"
        );
        Ok(snapshot)
    }

    async fn save_project_state(
        &self,
        state: &SaveProjectState,
    ) -> Result<serde_json::Value, GatewayError> {
        tracing::debug!(
            project = %state.project_id,
            images = state.image_indexes.len(),
            deleted = ?state.deleted_image_indexes,
            favorites = ?state.favorite_image_indexes,
            "saving project state"
        );

        let resp = check_response(self.post(SAVE_PATH).json(state).send().await?).await?;
        let body = resp.text().await?;
        Ok(parse_ack(&body))
    }

    async fn download_project_images(
        &self,
        project_id: &ProjectId,
    ) -> Result<Vec<u8>, GatewayError> {
        let path = format!(
            "/download_project_images/{}",
            urlencoding::encode(project_id.as_str())
        );
        tracing::debug!(project = %project_id, "requesting project archive");

        let resp = check_response(self.post(&path).send().await?).await?;
        let bytes = resp.bytes().await?;
        Ok(bytes.to_vec())
    }
}

/// The save acknowledgement is opaque: keep JSON when the backend sends it,
/// otherwise the raw text.
fn parse_ack(body: &str) -> serde_json::Value {
    if body.trim().is_empty() {
        return serde_json::Value::Null;
    }
    serde_json::from_str(body).unwrap_or_else(|_| serde_json::Value::String(body.to_string()))
}
