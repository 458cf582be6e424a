//! Parsing and validation of `canon.toml` project configuration files.
//!
//! The configuration names the project, points at the exported symbol model
//! to analyze, and carries the lint `deny`/`allow`/`warn` lists that the
//! engine applies on top of each rule's default severity.

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod types;

pub use error::ConfigError;
pub use loader::{load_config, load_config_from_str};
pub use types::{LintConfig, ProjectConfig, ProjectMeta};
