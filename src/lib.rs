//! Release notes for a milestone, built from the closed issues an issue
//! tracker reports for it.

pub mod changelog;
pub mod error;
pub mod models;
pub mod prompt;

pub use changelog::{render_changelog, ChangelogFetcher};
pub use error::ChangelogError;
pub use models::{config::Config, issue::Issue, request::ChangelogRequest};
