//! Wire schemas for backend requests and responses.
//!
//! Responses are decoded into these structs first and only then converted
//! into `sketch-core` entities, so shape problems surface as
//! [`GatewayError::Schema`] at the boundary.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use sketch_core::entities::{ProcessedVideo, ProjectId, ProjectSnapshot, UserProfile};

use crate::error::GatewayError;

/// `GET /get_project/{id}`.
#[derive(Debug, Deserialize)]
pub(crate) struct ProjectResponse {
    images: Vec<String>,
    deleted: Vec<usize>,
    /// Older projects have no favorites; `null` and absent both mean empty.
    #[serde(default)]
    favorites: Option<Vec<usize>>,
}

impl ProjectResponse {
    pub(crate) fn into_snapshot(self, endpoint: &str) -> Result<ProjectSnapshot, GatewayError> {
        ProjectSnapshot::new(
            self.images,
            self.deleted,
            self.favorites.unwrap_or_default(),
        )
        .map_err(|e| GatewayError::schema(endpoint, e.to_string()))
    }
}

/// Body of `POST /save_project_state`: a full snapshot of the curation state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveProjectState {
    pub project_id: ProjectId,
    /// Always the full `0..len` range.
    pub image_indexes: Vec<usize>,
    pub deleted_image_indexes: Vec<usize>,
    pub favorite_image_indexes: Vec<usize>,
}

/// `GET /get_user` and `GET /get_recent` wrap the profile in `data`.
#[derive(Debug, Deserialize)]
pub(crate) struct UserDataResponse {
    pub(crate) data: UserProfile,
}

/// `GET /get_assets/`: template key → presigned preview URL.
#[derive(Debug, Deserialize)]
pub(crate) struct AssetsResponse {
    pub(crate) presigned_urls: BTreeMap<String, String>,
}

/// `POST /uploadfile/`.
#[derive(Debug, Deserialize)]
pub(crate) struct UploadResponse {
    pub(crate) object_name: String,
}

/// `GET /get_presigned_url/`.
#[derive(Debug, Deserialize)]
pub(crate) struct PresignedUrlResponse {
    pub(crate) url: String,
}

/// `POST /process_and_upload_video/`.
#[derive(Debug, Deserialize)]
pub(crate) struct ProcessResponse {
    download_url: String,
    video_object_name: String,
}

/// `POST /process_and_upload_video_srt/` names the object `object_name`.
#[derive(Debug, Deserialize)]
pub(crate) struct ProcessSrtResponse {
    download_url: String,
    object_name: String,
}

impl From<ProcessResponse> for ProcessedVideo {
    fn from(resp: ProcessResponse) -> Self {
        Self {
            download_url: resp.download_url,
            video_object_name: resp.video_object_name,
        }
    }
}

impl From<ProcessSrtResponse> for ProcessedVideo {
    fn from(resp: ProcessSrtResponse) -> Self {
        Self {
            download_url: resp.download_url,
            video_object_name: resp.object_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::parse_json;
    use pretty_assertions::assert_eq;

    const PROJECT: &str = "/get_project/1";

    fn snapshot(body: &str) -> Result<ProjectSnapshot, GatewayError> {
        parse_json::<ProjectResponse>(body, PROJECT)?.into_snapshot(PROJECT)
    }

    #[test]
    fn full_project_response() {
        let snap =
            snapshot(r#"{"images":["a","b","c"],"deleted":[1],"favorites":[2,1]}"#).unwrap();
        assert_eq!(snap.images, vec!["a", "b", "c"]);
        assert_eq!(snap.deleted.into_iter().collect::<Vec<_>>(), vec![1]);
        assert_eq!(snap.favorites.into_iter().collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn absent_or_null_favorites_default_to_empty() {
        let absent = snapshot(r#"{"images":["a"],"deleted":[]}"#).unwrap();
        assert!(absent.favorites.is_empty());
        let null = snapshot(r#"{"images":["a"],"deleted":[],"favorites":null}"#).unwrap();
        assert!(null.favorites.is_empty());
    }

    #[test]
    fn missing_deleted_is_a_schema_violation() {
        let err = snapshot(r#"{"images":["a"]}"#).unwrap_err();
        assert!(
            matches!(err, GatewayError::Schema { ref reason, .. } if reason.contains("deleted"))
        );
    }

    #[test]
    fn negative_index_is_a_schema_violation() {
        let err = snapshot(r#"{"images":["a"],"deleted":[-1]}"#).unwrap_err();
        assert!(matches!(err, GatewayError::Schema { .. }));
    }

    #[test]
    fn out_of_range_index_is_a_schema_violation() {
        let err = snapshot(r#"{"images":["a","b"],"deleted":[],"favorites":[5]}"#).unwrap_err();
        assert!(
            matches!(
                err,
                GatewayError::Schema { ref reason, .. } if reason.contains("out of range")
            )
        );
    }

    #[test]
    fn save_state_uses_camel_case_keys() {
        let state = SaveProjectState {
            project_id: ProjectId::from("9"),
            image_indexes: vec![0, 1, 2],
            deleted_image_indexes: vec![1],
            favorite_image_indexes: vec![1],
        };
        let value = serde_json::to_value(&state).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "projectId": "9",
                "imageIndexes": [0, 1, 2],
                "deletedImageIndexes": [1],
                "favoriteImageIndexes": [1],
            })
        );
    }

    #[test]
    fn srt_response_maps_object_name() {
        let resp: ProcessSrtResponse =
            serde_json::from_str(r#"{"download_url":"u","object_name":"o.mp4"}"#).unwrap();
        let video = ProcessedVideo::from(resp);
        assert_eq!(video.video_object_name, "o.mp4");
    }

    #[test]
    fn user_data_unwraps_data_envelope() {
        let resp: UserDataResponse = serde_json::from_str(
            r#"{"data":{"email":"a@example.com","projects":[]}}"#,
        )
        .unwrap();
        assert_eq!(resp.data.email, "a@example.com");
    }

    #[test]
    fn user_data_accepts_numeric_project_ids() {
        let resp: UserDataResponse = serde_json::from_str(
            r#"{"data":{"email":"a@example.com","projects":[
                {"id":5,"name":"beach","created_at":"2024-05-01T10:30:00"},
                {"id":"p-6","name":"park","created_at":"2024-05-02T10:30:00"}
            ]}}"#,
        )
        .unwrap();
        let ids: Vec<&str> = resp.data.projects.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["5", "p-6"]);
    }
}
