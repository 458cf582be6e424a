//! Shared plumbing for the subcommands: project discovery and model loading.

use std::error::Error;
use std::path::{Path, PathBuf};

use canon_common::Interner;
use canon_config::ProjectConfig;
use canon_model::{Program, ProgramDump};

use crate::GlobalArgs;

/// Walks up from `start` looking for a directory containing `canon.toml`.
pub fn find_project_root(start: &Path) -> Result<PathBuf, Box<dyn Error>> {
    let mut dir = start.to_path_buf();
    loop {
        if dir.join("canon.toml").is_file() {
            return Ok(dir);
        }
        if !dir.pop() {
            return Err(format!(
                "could not find canon.toml in {} or any parent directory",
                start.display()
            )
            .into());
        }
    }
}

/// Resolves the project root from `--project` or the current directory.
pub fn resolve_project_root(global: &GlobalArgs) -> Result<PathBuf, Box<dyn Error>> {
    match &global.project {
        Some(dir) => {
            let dir = PathBuf::from(dir);
            if !dir.join("canon.toml").is_file() {
                return Err(format!("no canon.toml in {}", dir.display()).into());
            }
            Ok(dir)
        }
        None => find_project_root(&std::env::current_dir()?),
    }
}

/// Loads the exported symbol model named by the configuration.
pub fn load_model(
    project_dir: &Path,
    config: &ProjectConfig,
) -> Result<(Program, Interner), Box<dyn Error>> {
    let model_path = project_dir.join(&config.project.model);
    let json = std::fs::read_to_string(&model_path)
        .map_err(|e| format!("failed to read {}: {e}", model_path.display()))?;
    let dump = ProgramDump::from_json(&json)?;
    let interner = Interner::new();
    let program = dump.into_program(&interner)?;
    Ok((program, interner))
}
