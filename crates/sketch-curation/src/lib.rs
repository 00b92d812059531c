//! # sketch-curation
//!
//! Image curation for a processed project.
//!
//! A project is an ordered list of image URLs in which position is identity.
//! [`CurationModel`] keeps two independent index sets over that list (soft
//! deleted, favorite) plus the selected index, and derives the active,
//! deleted, and favorite views on demand. [`CurationSession`] binds a model to
//! a [`sketch_gateway::ProjectGateway`] for load, snapshot save, and archive
//! download.

mod download;
mod error;
mod model;
mod session;

pub use download::single_image_file_name;
pub use error::CurationError;
pub use model::{CurationModel, ImageRef, View};
pub use session::CurationSession;
