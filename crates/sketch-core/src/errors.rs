//! Cross-cutting error types for the sketch crates.
//!
//! Domain-specific errors (`GatewayError`, `AuthError`, `CurationError`) are
//! defined in their respective crates. They converge into `anyhow` in
//! `sketch-cli`.

use thiserror::Error;

/// Errors that can be raised by any sketch crate.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A template name did not match any known stylization template.
    #[error("unknown style template: {0}")]
    UnknownTemplate(String),

    /// Data failed validation (format, constraints).
    #[error("validation error: {0}")]
    Validation(String),
}
