use serde::{Deserialize, Serialize};

/// Result of submitting a video for stylization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessedVideo {
    /// Presigned URL of the converted video.
    pub download_url: String,
    /// Storage object name of the converted video.
    pub video_object_name: String,
}
