//! Entity structs for the AnimateSketch domain.
//!
//! These are validated domain values. Wire shapes returned by the backend
//! live in `sketch-gateway` and are converted into these at the boundary.

mod account;
mod project;
mod template;
mod video;

pub use account::{ProjectSummary, UserProfile};
pub use project::{ProjectId, ProjectSnapshot};
pub use template::StyleTemplate;
pub use video::ProcessedVideo;
