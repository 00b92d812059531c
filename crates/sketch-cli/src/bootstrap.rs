use anyhow::Context;
use sketch_config::SketchConfig;

/// Load `.env` from the working directory, then the layered config.
pub fn load_config() -> anyhow::Result<SketchConfig> {
    match dotenvy::dotenv() {
        Ok(path) => tracing::debug!(path = %path.display(), "loaded dotenv file"),
        Err(error) if error.not_found() => {}
        Err(error) => return Err(error).context("failed to load .env file"),
    }

    SketchConfig::load().context("failed to load sketch configuration")
}
