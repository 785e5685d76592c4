//! Required interpreter facilities.

use std::fmt;

use super::outcome::{FailureKind, StageOutcome};
use super::runtime::RuntimeProbe;

/// A facility the server cannot run without.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// Asynchronous execution support.
    AsyncExecution,
    /// Native shared-library loading.
    NativeLibraryLoading,
}

impl Capability {
    /// Every required capability, in reporting order.
    pub const REQUIRED: [Capability; 2] =
        [Capability::AsyncExecution, Capability::NativeLibraryLoading];

    /// Module that provides the capability.
    pub fn module(&self) -> &'static str {
        match self {
            Self::AsyncExecution => "asyncio",
            Self::NativeLibraryLoading => "ctypes",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.module())
    }
}

/// Gate passing iff every [`Capability::REQUIRED`] entry is available.
pub struct CapabilityGate;

impl CapabilityGate {
    /// Probe each capability; every one is reported, missing or not.
    pub fn check(probe: &dyn RuntimeProbe) -> StageOutcome {
        let mut notes = Vec::new();
        let mut missing = Vec::new();

        for capability in Capability::REQUIRED {
            if probe.has_facility(capability.module()) {
                notes.push(format!("{} available", capability));
            } else {
                notes.push(format!("{} unavailable", capability));
                missing.push(capability.module());
            }
        }

        let outcome = if missing.is_empty() {
            StageOutcome::passed("All required modules available")
        } else {
            StageOutcome::failed(
                FailureKind::EnvironmentUnmet,
                format!("Missing required modules: {}", missing.join(", ")),
            )
        };
        outcome.with_notes(notes)
    }
}
