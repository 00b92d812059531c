use reqwest::multipart::Form;
use serde::Deserialize;
use sketch_core::Session;

use crate::error::AuthError;

#[derive(Debug, Deserialize)]
struct TokenResponse {
    #[serde(default)]
    access_token: Option<String>,
}

/// Exchange credentials for an access token without storing it.
///
/// Posts `username` and `password` as multipart form fields to
/// `{base_url}/token`.
///
/// # Errors
///
/// - [`AuthError::InvalidCredentials`] for empty input, a 401/403 answer, or a
///   response without a usable `access_token`.
/// - [`AuthError::TokenEndpoint`] for any other non-success status.
/// - [`AuthError::Http`] for transport or body decoding failures.
pub async fn request_token(
    http: &reqwest::Client,
    base_url: &str,
    email: &str,
    password: &str,
) -> Result<Session, AuthError> {
    if email.trim().is_empty() || password.is_empty() {
        return Err(AuthError::InvalidCredentials);
    }

    let url = format!("{}/token", base_url.trim_end_matches('/'));
    let form = Form::new()
        .text("username", email.to_string())
        .text("password", password.to_string());

    tracing::debug!(%url, email, "requesting access token");
    let resp = http.post(&url).multipart(form).send().await?;

    let status = resp.status();
    if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
        return Err(AuthError::InvalidCredentials);
    }
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(AuthError::TokenEndpoint(format!(
            "{} {}",
            status.as_u16(),
            body.trim()
        )));
    }

    let token: TokenResponse = resp.json().await?;
    match token.access_token {
        Some(access_token) if !access_token.is_empty() => Ok(Session::new(email, access_token)),
        _ => Err(AuthError::InvalidCredentials),
    }
}

/// Exchange credentials for an access token and store the session.
///
/// # Errors
///
/// Returns the errors of [`request_token`], or
/// [`AuthError::TokenStoreError`] when the session cannot be persisted.
pub async fn login(
    http: &reqwest::Client,
    base_url: &str,
    email: &str,
    password: &str,
) -> Result<Session, AuthError> {
    let session = request_token(http, base_url, email, password).await?;
    crate::token_store::store(&session)?;
    Ok(session)
}
