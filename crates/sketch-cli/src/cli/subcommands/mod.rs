pub mod auth;
pub mod project;

pub use auth::AuthCommands;
pub use project::{ProjectCommands, ProjectView};
