pub mod account;
pub mod auth;
mod dispatch;
pub mod project;
pub mod upload;

pub use dispatch::dispatch;
