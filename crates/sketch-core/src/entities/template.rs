use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

const HAYAO_MODEL: &str = "app/model/deploy/AnimeGANv3_Hayao_36.onnx";

/// Stylization template offered by the backend.
///
/// Serialized with the same keys the backend uses for its preview assets
/// (`portraitSketch`, `jpFace`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StyleTemplate {
    /// The original, unstyled video.
    Video,
    Hayao,
    Shinkai,
    Paprika,
    PortraitSketch,
    JpFace,
}

impl StyleTemplate {
    pub const ALL: [Self; 6] = [
        Self::Video,
        Self::Hayao,
        Self::Shinkai,
        Self::Paprika,
        Self::PortraitSketch,
        Self::JpFace,
    ];

    /// Key used on the wire and on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Video => "video",
            Self::Hayao => "hayao",
            Self::Shinkai => "shinkai",
            Self::Paprika => "paprika",
            Self::PortraitSketch => "portraitSketch",
            Self::JpFace => "jpFace",
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Video => "This is the original one",
            Self::Hayao => "This style emulates the animation style of Hayao Miyazaki.",
            Self::Shinkai => "This style emulates the animation style of Makoto Shinkai.",
            Self::Paprika => "This style is inspired by the vibrant and surreal colors of Paprika.",
            Self::PortraitSketch => "This style converts the video into a portrait sketch.",
            Self::JpFace => "This style focuses on Japanese facial animation effects.",
        }
    }

    /// Backend model path sent with a raw upload.
    ///
    /// The unstyled template has no model of its own and uploads with the
    /// default (Hayao) model.
    #[must_use]
    pub const fn model_path(self) -> &'static str {
        match self {
            Self::Video | Self::Hayao => HAYAO_MODEL,
            Self::Shinkai => "app/model/deploy/AnimeGANv3_Shinkai_37.onnx",
            Self::Paprika => "app/model/deploy/AnimeGANv3_Paprika.onnx",
            Self::PortraitSketch => "app/model/deploy/AnimeGANv3_PortraitSketch.onnx",
            Self::JpFace => "app/model/deploy/AnimeGANv3_JP_face.onnx",
        }
    }
}

impl fmt::Display for StyleTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StyleTemplate {
    type Err = CoreError;

    /// Accepts the wire keys case-insensitively, `snake_case` spellings, and
    /// `none` as an alias for the unstyled template.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['_', '-'], "");
        match normalized.as_str() {
            "video" | "none" | "original" => Ok(Self::Video),
            "hayao" => Ok(Self::Hayao),
            "shinkai" => Ok(Self::Shinkai),
            "paprika" => Ok(Self::Paprika),
            "portraitsketch" => Ok(Self::PortraitSketch),
            "jpface" => Ok(Self::JpFace),
            _ => Err(CoreError::UnknownTemplate(s.to_string())),
        }
    }
}
