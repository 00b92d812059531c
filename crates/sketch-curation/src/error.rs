use std::path::PathBuf;

use sketch_core::entities::ProjectId;
use sketch_gateway::GatewayError;
use thiserror::Error;

/// Failures of a curation action. Each one ends the action; nothing is retried.
#[derive(Debug, Error)]
pub enum CurationError {
    /// The project snapshot could not be loaded.
    #[error("failed to load project {project}")]
    Fetch {
        project: ProjectId,
        #[source]
        source: GatewayError,
    },

    /// The snapshot push failed. In-memory state is unchanged.
    #[error("failed to save project state")]
    Save(#[source] GatewayError),

    /// An archive or image could not be retrieved.
    #[error("failed to download images")]
    Download(#[source] GatewayError),

    /// A downloaded file could not be written locally.
    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use pretty_assertions::assert_eq;

    use super::*;

    fn unavailable() -> GatewayError {
        GatewayError::Api {
            status: 503,
            message: "down".into(),
        }
    }

    /// Renders the error chain the way `{:#}` does for `anyhow`.
    fn chain(err: &CurationError) -> Vec<String> {
        let mut out = vec![err.to_string()];
        let mut cause = err.source();
        while let Some(inner) = cause {
            out.push(inner.to_string());
            cause = inner.source();
        }
        out
    }

    #[test]
    fn gateway_message_appears_once_in_the_chain() {
        let err = CurationError::Save(unavailable());
        assert_eq!(
            chain(&err),
            vec!["failed to save project state", "API error (503): down"]
        );
    }

    #[test]
    fn fetch_names_the_project_and_keeps_the_cause() {
        let err = CurationError::Fetch {
            project: ProjectId::from("p9"),
            source: unavailable(),
        };
        assert_eq!(
            chain(&err),
            vec!["failed to load project p9", "API error (503): down"]
        );
    }

    #[test]
    fn write_failure_keeps_io_cause() {
        let err = CurationError::Write {
            path: PathBuf::from("/tmp/out.zip"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(chain(&err), vec!["failed to write /tmp/out.zip", "denied"]);
    }
}
