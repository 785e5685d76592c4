//! Interpreter probing.
//!
//! The runtime being checked is the interpreter that will host the server.
//! [`RuntimeProbe`] is the seam; [`InterpreterProbe`] asks a real
//! interpreter by running it.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

use crate::error::{PreflightError, Result};
use crate::shell::{execute, CommandOptions};

/// Regex for the first `major.minor[.patch]` triple in version output.
static VERSION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+)\.(\d+)(?:\.(\d+))?").expect("VERSION_REGEX must compile")
});

/// A runtime's reported version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RuntimeVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl RuntimeVersion {
    /// Create a version from its parts.
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Extract a version from text such as `Python 3.11.4`.
    ///
    /// A missing patch component is read as 0.
    pub fn parse(text: &str) -> Option<Self> {
        let caps = VERSION_REGEX.captures(text)?;
        let major = caps.get(1)?.as_str().parse().ok()?;
        let minor = caps.get(2)?.as_str().parse().ok()?;
        let patch = match caps.get(3) {
            Some(m) => m.as_str().parse().ok()?,
            None => 0,
        };
        Some(Self::new(major, minor, patch))
    }
}

impl fmt::Display for RuntimeVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Queries about the interpreter that will host the server.
pub trait RuntimeProbe {
    /// Display name of the runtime (e.g. the interpreter command).
    fn name(&self) -> &str;

    /// The runtime's version.
    fn version(&self) -> Result<RuntimeVersion>;

    /// Whether a named facility (module) can be loaded.
    fn has_facility(&self, module: &str) -> bool;
}

/// Probe that runs the interpreter to answer.
#[derive(Debug, Clone)]
pub struct InterpreterProbe {
    interpreter: String,
}

impl InterpreterProbe {
    /// Create a probe for an interpreter command or path.
    pub fn new(interpreter: impl Into<String>) -> Self {
        Self {
            interpreter: interpreter.into(),
        }
    }

    fn probe_error(&self, message: impl Into<String>) -> PreflightError {
        PreflightError::RuntimeProbeFailed {
            interpreter: self.interpreter.clone(),
            message: message.into(),
        }
    }
}

impl RuntimeProbe for InterpreterProbe {
    fn name(&self) -> &str {
        &self.interpreter
    }

    fn version(&self) -> Result<RuntimeVersion> {
        let result = execute(&self.interpreter, &["--version"], &CommandOptions::default())
            .map_err(|e| self.probe_error(e.to_string()))?;

        if !result.success {
            return Err(self.probe_error(format!(
                "--version exited with {:?}: {}",
                result.exit_code,
                result.stderr.trim()
            )));
        }

        // Older interpreters print the version on stderr.
        RuntimeVersion::parse(&result.stdout)
            .or_else(|| RuntimeVersion::parse(&result.stderr))
            .ok_or_else(|| {
                self.probe_error(format!(
                    "unrecognised version output '{}'",
                    result.stdout.trim()
                ))
            })
    }

    fn has_facility(&self, module: &str) -> bool {
        let statement = format!("import {}", module);
        match execute(
            &self.interpreter,
            &["-c", statement.as_str()],
            &CommandOptions::default(),
        ) {
            Ok(result) => result.success,
            Err(e) => {
                tracing::debug!("Could not probe facility {}: {}", module, e);
                false
            }
        }
    }
}
