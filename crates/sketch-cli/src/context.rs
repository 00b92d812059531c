use std::path::{Path, PathBuf};

use anyhow::Context;
use sketch_auth::Session;
use sketch_config::SketchConfig;
use sketch_gateway::HttpGateway;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: SketchConfig,
    pub gateway: HttpGateway,
    pub session: Option<Session>,
}

impl AppContext {
    /// Build the gateway and attach the stored session, if there is one.
    pub fn init(config: SketchConfig) -> anyhow::Result<Self> {
        let session = sketch_auth::resolve_session();
        let mut gateway =
            HttpGateway::new(&config.gateway).context("failed to build backend HTTP client")?;

        match &session {
            Some(session) => {
                tracing::debug!(email = %session.email, "using stored session");
                gateway = gateway.with_session(session.clone());
            }
            None => tracing::debug!("no stored session; requests are unauthenticated"),
        }

        Ok(Self {
            config,
            gateway,
            session,
        })
    }

    /// The signed-in session, required by commands that act for a user.
    pub fn require_session(&self) -> anyhow::Result<&Session> {
        self.session
            .as_ref()
            .context("not signed in. Run 'sketch auth login' first.")
    }

    /// `--out` if given, otherwise `general.download_dir`.
    #[must_use]
    pub fn output_dir(&self, out: Option<&Path>) -> PathBuf {
        out.map_or_else(|| self.config.general.download_dir(), Path::to_path_buf)
    }
}
