//! Configuration loading and library resolution.
//!
//! This module handles:
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - The configuration layer's own library lookup in [`resolver`]
//!
//! # Example
//!
//! ```
//! use everything_preflight::config::load_config;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(
//!     temp.path().join("preflight.yml"),
//!     "server:\n  module: my_server",
//! )
//! .unwrap();
//!
//! let config = load_config(temp.path(), None).unwrap();
//! assert_eq!(config.server.module, "my_server");
//! assert_eq!(config.sdk.env_var, "EVERYTHING_SDK_PATH");
//! ```
//!
//! # Configuration File Location
//!
//! 1. `--config <path>` if given (must exist)
//! 2. `preflight.yml` in the project root (optional)
//! 3. Built-in defaults

pub mod loader;
pub mod resolver;
pub mod schema;

pub use loader::{load_config, load_config_file, parse_config, CONFIG_FILE_NAME};
pub use resolver::{LibraryResolver, SdkConfigResolver};
pub use schema::{PreflightConfig, SdkSettings, ServerSettings};
