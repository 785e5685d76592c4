//! Error types for preflight operations.
//!
//! This module defines [`PreflightError`], the primary error type used
//! throughout the tool, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Pipeline stages never return these errors to the caller; each stage
//!   converts its own failures into a [`StageOutcome`](crate::checks::StageOutcome)
//! - Configuration loading and terminal I/O errors are the only ones that
//!   reach `main`
//! - Use `anyhow::Error` (via `PreflightError::Other`) for opaque
//!   collaborator failures

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for preflight operations.
#[derive(Debug, Error)]
pub enum PreflightError {
    /// Configuration file not found at an explicitly requested location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// The server's interpreter could not be run or its output understood.
    #[error("Could not query interpreter '{interpreter}': {message}")]
    RuntimeProbeFailed {
        interpreter: String,
        message: String,
    },

    /// No candidate location held the shared library.
    #[error("Library not found, checked {} location(s)", checked.len())]
    LibraryNotFound { checked: Vec<PathBuf> },

    /// The server process could not be spawned.
    #[error("Failed to launch '{command}': {message}")]
    LaunchFailed { command: String, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for preflight operations.
pub type Result<T> = std::result::Result<T, PreflightError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_not_found_displays_path() {
        let err = PreflightError::ConfigNotFound {
            path: PathBuf::from("/foo/preflight.yml"),
        };
        assert!(err.to_string().contains("/foo/preflight.yml"));
    }

    #[test]
    fn config_parse_error_displays_path_and_message() {
        let err = PreflightError::ConfigParseError {
            path: PathBuf::from("/preflight.yml"),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/preflight.yml"));
        assert!(msg.contains("invalid syntax"));
    }

    #[test]
    fn runtime_probe_failed_displays_interpreter() {
        let err = PreflightError::RuntimeProbeFailed {
            interpreter: "python3".into(),
            message: "No such file or directory".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("python3"));
        assert!(msg.contains("No such file"));
    }

    #[test]
    fn library_not_found_counts_checked_paths() {
        let err = PreflightError::LibraryNotFound {
            checked: vec![PathBuf::from("/a"), PathBuf::from("/b")],
        };
        assert!(err.to_string().contains("2 location(s)"));
    }

    #[test]
    fn launch_failed_displays_command_and_message() {
        let err = PreflightError::LaunchFailed {
            command: "python3 -m server".into(),
            message: "permission denied".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("python3 -m server"));
        assert!(msg.contains("permission denied"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: PreflightError = io_err.into();
        assert!(matches!(err, PreflightError::Io(_)));
    }

    #[test]
    fn anyhow_error_is_transparent() {
        let err: PreflightError = anyhow::anyhow!("collaborator exploded").into();
        assert_eq!(err.to_string(), "collaborator exploded");
    }
}
