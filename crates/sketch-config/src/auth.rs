//! Sign-in defaults.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Email used by `sketch auth login` when `--email` is omitted.
    #[serde(default)]
    pub email: String,
}

impl AuthConfig {
    pub fn is_configured(&self) -> bool {
        !self.email.is_empty()
    }
}
