//! Gateway error types.

use thiserror::Error;

/// Errors that can occur when talking to the processing backend.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// HTTP transport error.
    #[error("HTTP request failed")]
    Http(#[from] reqwest::Error),

    /// The backend returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the backend.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// The backend answered with a body that does not match the expected schema.
    #[error("schema violation from {endpoint}: {reason}")]
    Schema {
        /// Endpoint path the response came from.
        endpoint: String,
        /// What was missing or malformed.
        reason: String,
    },

    /// A local file needed for the request could not be read.
    #[error("I/O error on {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl GatewayError {
    pub(crate) fn schema(endpoint: &str, reason: impl Into<String>) -> Self {
        Self::Schema {
            endpoint: endpoint.to_string(),
            reason: reason.into(),
        }
    }
}
