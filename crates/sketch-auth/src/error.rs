use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("not authenticated: run `sketch auth login`")]
    NotAuthenticated,

    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("token endpoint error: {0}")]
    TokenEndpoint(String),

    #[error("HTTP request to the token endpoint failed")]
    Http(#[from] reqwest::Error),

    #[error("token store error: {0}")]
    TokenStoreError(String),
}
