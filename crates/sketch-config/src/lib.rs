//! # sketch-config
//!
//! Layered configuration loading for the AnimateSketch client using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`SKETCH_*` prefix, `__` as separator)
//! 2. Project-level `.sketch/config.toml`
//! 3. User-level `~/.config/sketch/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `SKETCH_GATEWAY__BASE_URL` -> `gateway.base_url`,
//! `SKETCH_GENERAL__DOWNLOAD_DIR` -> `general.download_dir`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use sketch_config::SketchConfig;
//!
//! let config = SketchConfig::load_with_dotenv().expect("config");
//! println!("backend: {}", config.gateway.base_url());
//! ```

mod auth;
mod error;
mod gateway;
mod general;

pub use auth::AuthConfig;
pub use error::ConfigError;
pub use gateway::GatewayConfig;
pub use general::GeneralConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SketchConfig {
    #[serde(default)]
    pub gateway: GatewayConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl SketchConfig {
    /// Load configuration from all sources (TOML files + environment variables)
    /// and validate it.
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if extraction fails or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Extract and validate a config from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if extraction fails or a value is invalid.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.gateway.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".sketch/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("SKETCH_").split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("sketch").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = SketchConfig::default();
        assert_eq!(config.gateway.base_url(), "http://127.0.0.1:8000");
        assert!(!config.auth.is_configured());
    }

    #[test]
    fn defaults_extract_through_figment() {
        let figment = Figment::from(Serialized::defaults(SketchConfig::default()));
        let config = SketchConfig::from_figment(&figment).expect("should extract defaults");
        assert!(config.gateway.timeout_secs.is_none());
        assert!(config.general.download_dir.is_empty());
    }
}
