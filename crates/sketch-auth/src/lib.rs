//! # sketch-auth
//!
//! Credential hand-off for the AnimateSketch client.
//!
//! Exchanges an email and password for a backend access token, stores the
//! resulting [`Session`] (OS keychain via `keyring`, env var, or a 0600 file)
//! and clears it on logout. The session is then passed explicitly to the
//! gateway; nothing here is consulted ambiently.

pub mod error;
pub mod login;
pub mod token_store;

pub use error::AuthError;
pub use sketch_core::Session;

/// Resolve the stored session, if any.
///
/// Priority: keyring → env var → file. The token is not validated; the
/// backend rejects stale tokens on first use.
#[must_use]
pub fn resolve_session() -> Option<Session> {
    token_store::load()
}

/// Resolve the stored session or fail with [`AuthError::NotAuthenticated`].
///
/// # Errors
///
/// Returns [`AuthError::NotAuthenticated`] when no session is stored.
pub fn require_session() -> Result<Session, AuthError> {
    resolve_session().ok_or(AuthError::NotAuthenticated)
}

/// Clear stored credentials.
///
/// # Errors
///
/// Returns `AuthError::TokenStoreError` if the credentials file cannot be removed.
pub fn logout() -> Result<(), AuthError> {
    token_store::delete()
}
