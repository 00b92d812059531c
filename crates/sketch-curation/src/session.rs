use std::path::{Path, PathBuf};

use sketch_core::entities::ProjectId;
use sketch_gateway::{HttpGateway, ProjectGateway};

use crate::download::{single_image_file_name, write_into};
use crate::error::CurationError;
use crate::model::CurationModel;

/// A curation model bound to one project and the gateway that persists it.
///
/// State lives only in memory until [`Self::save`] is called; there is no
/// auto-save.
#[derive(Debug)]
pub struct CurationSession<G> {
    gateway: G,
    project_id: ProjectId,
    model: CurationModel,
}

impl<G: ProjectGateway> CurationSession<G> {
    /// Fetch the project snapshot and start a session with selection 0.
    ///
    /// # Errors
    ///
    /// Returns [`CurationError::Fetch`] if the request or the response
    /// validation fails.
    pub async fn load(gateway: G, project_id: ProjectId) -> Result<Self, CurationError> {
        let snapshot = gateway
            .fetch_project(&project_id)
            .await
            .map_err(|source| CurationError::Fetch {
                project: project_id.clone(),
                source,
            })?;
        Ok(Self {
            gateway,
            project_id,
            model: CurationModel::new(snapshot),
        })
    }

    /// Re-fetch the snapshot, discarding unsaved changes.
    ///
    /// # Errors
    ///
    /// Returns [`CurationError::Fetch`]; the current state is kept on failure.
    pub async fn reload(&mut self) -> Result<(), CurationError> {
        let snapshot = self
            .gateway
            .fetch_project(&self.project_id)
            .await
            .map_err(|source| CurationError::Fetch {
                project: self.project_id.clone(),
                source,
            })?;
        self.model.replace(snapshot);
        Ok(())
    }

    /// Push the full snapshot to the backend.
    ///
    /// Saves are not serialized: if two overlap, whichever response the
    /// backend processes last wins.
    ///
    /// # Errors
    ///
    /// Returns [`CurationError::Save`] with the gateway error. In-memory
    /// state is untouched, so the caller may retry.
    pub async fn save(&self) -> Result<serde_json::Value, CurationError> {
        let request = self.model.save_request(&self.project_id);
        let ack = self
            .gateway
            .save_project_state(&request)
            .await
            .map_err(CurationError::Save)?;
        tracing::info!(
            project = %self.project_id,
            deleted = request.deleted_image_indexes.len(),
            favorites = request.favorite_image_indexes.len(),
            "project state saved"
        );
        Ok(ack)
    }

    /// Retrieve the server-built image archive. Which images it contains is
    /// the backend's decision.
    ///
    /// # Errors
    ///
    /// Returns [`CurationError::Download`] with the gateway error.
    pub async fn download_archive(&self) -> Result<Vec<u8>, CurationError> {
        self.gateway
            .download_project_images(&self.project_id)
            .await
            .map_err(CurationError::Download)
    }

    /// Download the archive into `dir` as `project_{id}_images.zip`.
    ///
    /// # Errors
    ///
    /// Returns [`CurationError::Download`] or [`CurationError::Write`]. No
    /// file is created when the download fails.
    pub async fn download_archive_to(&self, dir: &Path) -> Result<PathBuf, CurationError> {
        let bytes = self.download_archive().await?;
        write_into(dir, &self.project_id.archive_file_name(), &bytes).await
    }
}

impl<G> CurationSession<G> {
    #[must_use]
    pub const fn project_id(&self) -> &ProjectId {
        &self.project_id
    }

    #[must_use]
    pub const fn model(&self) -> &CurationModel {
        &self.model
    }

    pub const fn model_mut(&mut self) -> &mut CurationModel {
        &mut self.model
    }

    #[must_use]
    pub const fn gateway(&self) -> &G {
        &self.gateway
    }
}

impl CurationSession<HttpGateway> {
    /// Save one image into `dir` as `image_{index+1}.jpeg`.
    ///
    /// Purely local: the backend is not told about single downloads.
    ///
    /// # Errors
    ///
    /// Returns [`CurationError::Download`] or [`CurationError::Write`].
    pub async fn download_single(
        &self,
        url: &str,
        index: usize,
        dir: &Path,
    ) -> Result<PathBuf, CurationError> {
        let bytes = self
            .gateway
            .fetch_bytes(url)
            .await
            .map_err(CurationError::Download)?;
        write_into(dir, &single_image_file_name(index), &bytes).await
    }
}
