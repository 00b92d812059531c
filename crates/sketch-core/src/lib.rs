//! # sketch-core
//!
//! Core types and error types for the AnimateSketch client.
//!
//! This crate provides the foundational types shared across all sketch crates:
//! - Project snapshot and project identifiers used by the curation model
//! - Account listings (user profile, project summaries)
//! - Stylization templates and their backend model paths
//! - The explicit authenticated [`Session`] value
//! - Cross-cutting error types

pub mod entities;
pub mod errors;
pub mod identity;

pub use errors::CoreError;
pub use identity::Session;
