//! Shared HTTP response helpers.
//!
//! Centralizes status checks and schema-checked JSON decoding so the endpoint
//! modules stay focused on request construction and response mapping.

use serde::de::DeserializeOwned;

use crate::error::GatewayError;

/// Return the response unchanged on success, or [`GatewayError::Api`] with
/// the status code and response body.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, GatewayError> {
    if !resp.status().is_success() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        let message = if body.trim().is_empty() {
            status.canonical_reason().unwrap_or("request failed").to_string()
        } else {
            body.trim().to_string()
        };
        return Err(GatewayError::Api {
            status: status.as_u16(),
            message,
        });
    }
    Ok(resp)
}

/// Read the body and decode it as `T`.
///
/// Transport failures stay [`GatewayError::Http`]; a body that is not the
/// expected shape becomes [`GatewayError::Schema`].
pub async fn decode_json<T: DeserializeOwned>(
    resp: reqwest::Response,
    endpoint: &str,
) -> Result<T, GatewayError> {
    let body = resp.text().await?;
    parse_json(&body, endpoint)
}

pub fn parse_json<T: DeserializeOwned>(body: &str, endpoint: &str) -> Result<T, GatewayError> {
    serde_json::from_str(body).map_err(|e| GatewayError::schema(endpoint, e.to_string()))
}
