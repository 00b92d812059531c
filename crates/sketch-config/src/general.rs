//! General application configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use sketch_core::entities::StyleTemplate;

const fn default_style() -> StyleTemplate {
    StyleTemplate::Hayao
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Directory downloads are written to. Empty means the current directory.
    #[serde(default)]
    pub download_dir: String,

    /// Template used by `sketch upload` when `--style` is omitted.
    #[serde(default = "default_style")]
    pub default_style: StyleTemplate,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            download_dir: String::new(),
            default_style: default_style(),
        }
    }
}

impl GeneralConfig {
    #[must_use]
    pub fn download_dir(&self) -> PathBuf {
        if self.download_dir.is_empty() {
            PathBuf::from(".")
        } else {
            PathBuf::from(&self.download_dir)
        }
    }
}
