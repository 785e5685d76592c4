//! Configuration file discovery and loading.

use crate::config::schema::PreflightConfig;
use crate::error::{PreflightError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up in the project root when no explicit path is given.
pub const CONFIG_FILE_NAME: &str = "preflight.yml";

/// Load configuration for a project.
///
/// An explicit path must exist. Without one, `preflight.yml` in the project
/// root is used if present, otherwise the built-in defaults.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the explicit file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config(project_root: &Path, explicit: Option<&Path>) -> Result<PreflightConfig> {
    if let Some(path) = explicit {
        let path = resolve_relative(project_root, path);
        tracing::debug!("Loading config from {}", path.display());
        return load_config_file(&path);
    }

    let default_path = project_root.join(CONFIG_FILE_NAME);
    if default_path.is_file() {
        tracing::debug!("Loading config from {}", default_path.display());
        load_config_file(&default_path)
    } else {
        tracing::debug!("No {} found, using defaults", CONFIG_FILE_NAME);
        Ok(PreflightConfig::default())
    }
}

/// Load a single config file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<PreflightConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            PreflightError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            PreflightError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into a [`PreflightConfig`].
///
/// An empty document is treated as all defaults.
pub fn parse_config(content: &str, source_path: &Path) -> Result<PreflightConfig> {
    if content.trim().is_empty() {
        return Ok(PreflightConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| PreflightError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

fn resolve_relative(project_root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        project_root.join(path)
    }
}
