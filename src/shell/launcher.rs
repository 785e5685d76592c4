//! Launching the dependent server.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::config::ServerSettings;
use crate::error::{PreflightError, Result};

use super::command::{command_line, execute, CommandOptions};

/// Fixed invocation of the dependent server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchSpec {
    /// Program to run (the interpreter).
    pub program: String,
    /// Arguments passed to the program.
    pub args: Vec<String>,
    /// Directory the child runs in.
    pub working_dir: PathBuf,
}

impl LaunchSpec {
    /// Build `<interpreter> -m <module>` run from `<project_root>/<working_dir>`.
    pub fn from_settings(project_root: &Path, settings: &ServerSettings) -> Self {
        Self {
            program: settings.interpreter.clone(),
            args: vec!["-m".to_string(), settings.module.clone()],
            working_dir: project_root.join(&settings.working_dir),
        }
    }

    /// The command line as it would be typed.
    pub fn command_line(&self) -> String {
        command_line(&self.program, &self.args)
    }
}

/// Captured outcome of one server run.
#[derive(Debug, Clone)]
pub struct LaunchResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,
    /// Captured standard output.
    pub stdout: String,
    /// Captured standard error.
    pub stderr: String,
    /// Wall-clock run time.
    pub duration: Duration,
}

impl LaunchResult {
    /// Whether the server exited with status 0.
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Runs the dependent server as a child process and waits for it.
///
/// The tool's own working directory is left alone; only the child runs in
/// [`LaunchSpec::working_dir`]. The server speaks over stdio, so it inherits
/// the tool's stdin. There is no timeout.
#[derive(Debug, Clone)]
pub struct ServerLauncher {
    spec: LaunchSpec,
}

impl ServerLauncher {
    /// Create a launcher for a fixed invocation.
    pub fn new(spec: LaunchSpec) -> Self {
        Self { spec }
    }

    /// The invocation this launcher runs.
    pub fn spec(&self) -> &LaunchSpec {
        &self.spec
    }

    /// Spawn the server, wait for it to exit, and capture its output.
    ///
    /// # Errors
    ///
    /// Returns `LaunchFailed` if the process could not be started at all.
    /// A server that starts and exits nonzero is an `Ok` result.
    pub fn launch(&self) -> Result<LaunchResult> {
        let options = CommandOptions {
            cwd: Some(self.spec.working_dir.clone()),
            inherit_stdin: true,
        };

        let result = execute(&self.spec.program, &self.spec.args, &options).map_err(|e| {
            PreflightError::LaunchFailed {
                command: self.spec.command_line(),
                message: describe_spawn_error(&e, &self.spec),
            }
        })?;

        tracing::debug!(
            "Server exited with {:?} after {:?}",
            result.exit_code,
            result.duration
        );

        Ok(LaunchResult {
            exit_code: result.exit_code,
            stdout: result.stdout,
            stderr: result.stderr,
            duration: result.duration,
        })
    }
}

fn describe_spawn_error(err: &PreflightError, spec: &LaunchSpec) -> String {
    if !spec.working_dir.is_dir() {
        return format!(
            "working directory {} does not exist",
            spec.working_dir.display()
        );
    }
    match err {
        PreflightError::Io(io) if io.kind() == std::io::ErrorKind::NotFound => {
            format!("'{}' was not found", spec.program)
        }
        other => other.to_string(),
    }
}
