//! Configuration schema definitions.
//!
//! These structs map to the `preflight.yml` file format. Every field has a
//! default so an empty or missing file yields a working configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::discovery::defaults::{DEFAULT_LIBRARY_NAME, DEFAULT_SDK_ENV_VAR};

/// Root configuration structure for `preflight.yml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PreflightConfig {
    /// Where to look for the SDK library.
    pub sdk: SdkSettings,

    /// How to start the dependent server.
    pub server: ServerSettings,
}

/// SDK library lookup settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SdkSettings {
    /// Environment variable holding an explicit library path.
    pub env_var: String,

    /// File name of the library (used for the working-directory candidate).
    pub library_name: String,

    /// Extra fixed candidate paths, tried after the built-in ones.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub search_paths: Vec<PathBuf>,

    /// Extra wildcard patterns, tried after the built-in ones.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub search_patterns: Vec<String>,
}

impl Default for SdkSettings {
    fn default() -> Self {
        Self {
            env_var: DEFAULT_SDK_ENV_VAR.to_string(),
            library_name: DEFAULT_LIBRARY_NAME.to_string(),
            search_paths: Vec::new(),
            search_patterns: Vec::new(),
        }
    }
}

/// Dependent server launch settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerSettings {
    /// Interpreter that hosts the server (also the runtime being checked).
    pub interpreter: String,

    /// Module passed to `<interpreter> -m`.
    pub module: String,

    /// Working directory for the server, relative to the project root.
    pub working_dir: PathBuf,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            interpreter: default_interpreter().to_string(),
            module: "mcp_server_everything_search".to_string(),
            working_dir: PathBuf::from("src").join("mcp_server_everything_search"),
        }
    }
}

fn default_interpreter() -> &'static str {
    if cfg!(windows) {
        "python"
    } else {
        "python3"
    }
}
