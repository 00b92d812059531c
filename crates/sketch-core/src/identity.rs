use std::fmt;

use serde::{Deserialize, Serialize};

/// Authenticated user session, passed explicitly to the gateway and CLI context.
///
/// Produced by `sketch-auth` after the credential hand-off with the backend
/// token endpoint. Contains only data fields.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Email the user signed in with. The backend keys projects by it.
    pub email: String,
    /// Bearer token returned by the `/token` endpoint.
    pub access_token: String,
}

impl Session {
    #[must_use]
    pub fn new(email: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            access_token: access_token.into(),
        }
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("email", &self.email)
            .field("access_token", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_redacts_token() {
        let session = Session::new("a@example.com", "secret-token");
        let rendered = format!("{session:?}");
        assert!(rendered.contains("a@example.com"));
        assert!(!rendered.contains("secret-token"));
    }

    #[test]
    fn serde_roundtrip() {
        let session = Session::new("a@example.com", "tok");
        let json = serde_json::to_string(&session).unwrap();
        let back: Session = serde_json::from_str(&json).unwrap();
        assert_eq!(back, session);
    }
}
