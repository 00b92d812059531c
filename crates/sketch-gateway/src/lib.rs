//! # sketch-gateway
//!
//! HTTP gateway to the AnimateSketch processing backend.
//!
//! The backend owns all real work (style transfer, frame extraction, storage,
//! archive generation). This crate issues the requests and validates the
//! responses at the boundary:
//! - project snapshot fetch/save and archive download ([`ProjectGateway`])
//! - account listings (user projects, recent projects, template previews)
//! - video upload and processing submission

mod account;
mod client;
mod error;
mod http;
mod media;
mod project;
mod wire;

use std::future::Future;

use sketch_core::entities::{ProjectId, ProjectSnapshot};

pub use client::HttpGateway;
pub use error::GatewayError;
pub use wire::SaveProjectState;

/// The project endpoints the curation model depends on.
///
/// Implemented over HTTP by [`HttpGateway`]; tests substitute in-memory
/// doubles.
pub trait ProjectGateway: Send + Sync {
    /// Fetch the current project snapshot.
    fn fetch_project(
        &self,
        project_id: &ProjectId,
    ) -> impl Future<Output = Result<ProjectSnapshot, GatewayError>> + Send;

    /// Push a full snapshot. The returned acknowledgement is opaque.
    fn save_project_state(
        &self,
        state: &SaveProjectState,
    ) -> impl Future<Output = Result<serde_json::Value, GatewayError>> + Send;

    /// Ask the backend to build and return the project's image archive.
    fn download_project_images(
        &self,
        project_id: &ProjectId,
    ) -> impl Future<Output = Result<Vec<u8>, GatewayError>> + Send;
}
