use std::fs;
use std::path::{Path, PathBuf};

use sketch_core::Session;

use crate::error::AuthError;

const DEFAULT_KEYRING_SERVICE: &str = "sketch-cli";
const KEYRING_USER: &str = "session";
const CREDENTIALS_FILE_NAME: &str = "credentials";
const TOKEN_ENV: &str = "SKETCH_AUTH__TOKEN";
const EMAIL_ENV: &str = "SKETCH_AUTH__EMAIL";

/// Returns the keyring service name.
///
/// Override via `SKETCH_KEYRING_SERVICE` (e.g. `"sketch-cli-test"`) to keep
/// tests away from real credentials.
fn keyring_service() -> String {
    std::env::var("SKETCH_KEYRING_SERVICE").unwrap_or_else(|_| DEFAULT_KEYRING_SERVICE.to_string())
}

/// Store a session in the OS keychain. Falls back to file if keyring unavailable.
///
/// # Errors
///
/// Returns `AuthError::TokenStoreError` if both keyring and file storage fail.
pub fn store(session: &Session) -> Result<(), AuthError> {
    let encoded = encode(session)?;
    match keyring::Entry::new(&keyring_service(), KEYRING_USER) {
        Ok(entry) => match entry.set_password(&encoded) {
            Ok(()) => Ok(()),
            Err(error) => {
                tracing::warn!(%error, "keyring store failed; falling back to file");
                write_credentials(&credentials_path()?, session)
            }
        },
        Err(error) => {
            tracing::warn!(%error, "keyring unavailable; falling back to file");
            write_credentials(&credentials_path()?, session)
        }
    }
}

/// Load a session.
///
/// Priority: keyring → `SKETCH_AUTH__TOKEN` env → file (`~/.sketch/credentials`).
#[must_use]
pub fn load() -> Option<Session> {
    if let Some(session) = load_keyring() {
        return Some(session);
    }

    if let Some(session) = load_env() {
        return Some(session);
    }

    credentials_path().ok().and_then(|path| read_credentials(&path))
}

/// Delete stored credentials from keyring and file.
///
/// # Errors
///
/// Returns `AuthError::TokenStoreError` if the credentials file cannot be removed.
pub fn delete() -> Result<(), AuthError> {
    // Ignore keyring errors: the entry may not exist.
    if let Ok(entry) = keyring::Entry::new(&keyring_service(), KEYRING_USER) {
        let _ = entry.delete_credential();
    }

    let path = credentials_path()?;
    if path.exists() {
        fs::remove_file(&path).map_err(|e| {
            AuthError::TokenStoreError(format!("failed to delete {}: {e}", path.display()))
        })?;
    }

    Ok(())
}

/// Detect which tier the current session came from (for status display).
#[must_use]
pub fn detect_token_source() -> Option<String> {
    if load_keyring().is_some() {
        return Some("keyring".into());
    }
    if load_env().is_some() {
        return Some("env".into());
    }
    if credentials_path()
        .ok()
        .and_then(|path| read_credentials(&path))
        .is_some()
    {
        return Some("file".into());
    }
    None
}

fn load_keyring() -> Option<Session> {
    let entry = keyring::Entry::new(&keyring_service(), KEYRING_USER).ok()?;
    let raw = entry.get_password().ok()?;
    decode(&raw)
}

fn load_env() -> Option<Session> {
    let token = std::env::var(TOKEN_ENV).ok().filter(|t| !t.is_empty())?;
    let email = std::env::var(EMAIL_ENV).unwrap_or_default();
    Some(Session::new(email, token))
}

fn encode(session: &Session) -> Result<String, AuthError> {
    serde_json::to_string(session)
        .map_err(|e| AuthError::TokenStoreError(format!("encode session: {e}")))
}

fn decode(raw: &str) -> Option<Session> {
    if raw.trim().is_empty() {
        return None;
    }
    match serde_json::from_str::<Session>(raw) {
        Ok(session) if !session.access_token.is_empty() => Some(session),
        Ok(_) => None,
        Err(error) => {
            tracing::warn!(%error, "ignoring unreadable stored session");
            None
        }
    }
}

fn credentials_path() -> Result<PathBuf, AuthError> {
    dirs::home_dir()
        .map(|h| h.join(".sketch").join(CREDENTIALS_FILE_NAME))
        .ok_or_else(|| {
            AuthError::TokenStoreError("home directory not found; cannot store credentials".into())
        })
}

fn write_credentials(path: &Path, session: &Session) -> Result<(), AuthError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| AuthError::TokenStoreError(format!("mkdir {}: {e}", parent.display())))?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if let Err(e) = fs::set_permissions(parent, fs::Permissions::from_mode(0o700)) {
                tracing::warn!("failed to chmod 0700 {}: {e}", parent.display());
            }
        }
    }
    fs::write(path, encode(session)?)
        .map_err(|e| AuthError::TokenStoreError(format!("write {}: {e}", path.display())))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o600))
            .map_err(|e| AuthError::TokenStoreError(format!("chmod {}: {e}", path.display())))?;
    }

    Ok(())
}

fn read_credentials(path: &Path) -> Option<Session> {
    fs::read_to_string(path).ok().and_then(|raw| decode(&raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn credentials_path_is_under_home() {
        let path = credentials_path().expect("should resolve");
        assert!(path.ends_with(".sketch/credentials"));
    }

    #[test]
    fn file_write_read_cycle() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let path = tmp.path().join("nested").join("credentials");
        let session = Session::new("maker@example.com", "jwt-abc123");

        write_credentials(&path, &session).expect("write");
        assert_eq!(read_credentials(&path), Some(session));

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = fs::metadata(&path).expect("metadata").permissions().mode() & 0o777;
            assert_eq!(mode, 0o600, "credentials file should be 0600");
        }
    }

    #[test]
    fn whitespace_only_file_is_ignored() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let path = tmp.path().join("credentials");
        fs::write(&path, "   \n  ").expect("write");
        assert!(read_credentials(&path).is_none());
    }

    #[test]
    fn stored_session_without_token_is_ignored() {
        assert!(decode(r#"{"email":"a@example.com","access_token":""}"#).is_none());
        assert!(decode("not json").is_none());
    }

    #[test]
    fn missing_file_reads_as_none() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        assert!(read_credentials(&tmp.path().join("absent")).is_none());
    }
}
