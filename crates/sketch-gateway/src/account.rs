//! Account listing endpoints: user projects, recent projects, template previews.

use std::collections::BTreeMap;

use sketch_core::entities::{StyleTemplate, UserProfile};

use crate::http::{check_response, decode_json};
use crate::wire::{AssetsResponse, UserDataResponse};
use crate::{GatewayError, HttpGateway};

const ASSETS_PATH: &str = "/get_assets/";

impl HttpGateway {
    /// List every project the backend has for `email`.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] if the request fails, the backend returns a
    /// non-success status, or the body is not a user profile.
    pub async fn fetch_user_data(&self, email: &str) -> Result<UserProfile, GatewayError> {
        self.fetch_profile("/get_user", email).await
    }

    /// List the most recent projects for `email`.
    ///
    /// # Errors
    ///
    /// Same as [`Self::fetch_user_data`].
    pub async fn fetch_recent(&self, email: &str) -> Result<UserProfile, GatewayError> {
        self.fetch_profile("/get_recent", email).await
    }

    /// Presigned preview video URL per stylization template.
    ///
    /// Keys the backend sends that are not known templates are logged and
    /// skipped.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] if the request fails or the body has no
    /// `presigned_urls` map.
    pub async fn fetch_assets(&self) -> Result<BTreeMap<StyleTemplate, String>, GatewayError> {
        let resp = check_response(self.get(ASSETS_PATH).send().await?).await?;
        let body: AssetsResponse = decode_json(resp, ASSETS_PATH).await?;
        Ok(map_assets(body.presigned_urls))
    }

    async fn fetch_profile(&self, path: &str, email: &str) -> Result<UserProfile, GatewayError> {
        let full = format!("{path}?email={}", urlencoding::encode(email));
        tracing::debug!(endpoint = path, email, "fetching user data");
        let resp = check_response(self.get(&full).send().await?).await?;
        let body: UserDataResponse = decode_json(resp, path).await?;
        Ok(body.data)
    }
}

fn map_assets(raw: BTreeMap<String, String>) -> BTreeMap<StyleTemplate, String> {
    raw.into_iter()
        .filter_map(|(key, url)| match key.parse::<StyleTemplate>() {
            Ok(template) => Some((template, url)),
            Err(error) => {
                tracing::warn!(%error, "skipping preview for unknown template");
                None
            }
        })
        .collect()
}
