use std::time::Duration;

use sketch_config::GatewayConfig;
use sketch_core::Session;

use crate::error::GatewayError;

/// reqwest-backed client for the processing backend.
///
/// Carries the signed-in [`Session`] explicitly; requests made without one go
/// out unauthenticated.
#[derive(Debug, Clone)]
pub struct HttpGateway {
    pub(crate) http: reqwest::Client,
    base_url: String,
    session: Option<Session>,
}

impl HttpGateway {
    /// Build a gateway from configuration.
    ///
    /// No timeout is applied unless `timeout_secs` is set.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Http`] if the underlying `reqwest::Client`
    /// fails to build.
    pub fn new(config: &GatewayConfig) -> Result<Self, GatewayError> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.clone());
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        Ok(Self {
            http: builder.build()?,
            base_url: config.base_url().to_string(),
            session: None,
        })
    }

    /// Attach the session whose token authenticates every request.
    #[must_use]
    pub fn with_session(mut self, session: Session) -> Self {
        self.session = Some(session);
        self
    }

    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The underlying HTTP client, shared with the credential hand-off.
    #[must_use]
    pub const fn http(&self) -> &reqwest::Client {
        &self.http
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    pub(crate) fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.authorize(self.http.get(self.url(path)))
    }

    pub(crate) fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.authorize(self.http.post(self.url(path)))
    }

    fn authorize(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.session {
            Some(session) => builder.bearer_auth(&session.access_token),
            None => builder,
        }
    }
}
