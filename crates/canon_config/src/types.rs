//! Configuration types deserialized from `canon.toml`.

use serde::Deserialize;

/// The top-level project configuration parsed from `canon.toml`.
#[derive(Debug, Deserialize)]
pub struct ProjectConfig {
    /// Core project metadata.
    pub project: ProjectMeta,
    /// Lint settings (deny/allow/warn rule lists).
    #[serde(default)]
    pub lint: LintConfig,
}

/// Core project metadata required in every `canon.toml`.
#[derive(Debug, Deserialize)]
pub struct ProjectMeta {
    /// The project name.
    pub name: String,
    /// The project version string.
    #[serde(default)]
    pub version: String,
    /// A brief description of the project.
    #[serde(default)]
    pub description: String,
    /// Path to the exported symbol model (JSON), relative to the project root.
    pub model: String,
}

/// Lint rule severity overrides.
///
/// Entries are rule names (e.g. `private-field-naming`); unknown names are
/// ignored by the engine rather than rejected here, so configurations stay
/// forward-compatible across rule additions.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct LintConfig {
    /// Rule names to promote to error severity.
    #[serde(default)]
    pub deny: Vec<String>,
    /// Rule names to suppress entirely.
    #[serde(default)]
    pub allow: Vec<String>,
    /// Rule names to force to warning severity.
    #[serde(default)]
    pub warn: Vec<String>,
}
