//! Stage outcome types.

use std::fmt;

/// Why a stage failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The host runtime is too old or lacks a required facility.
    EnvironmentUnmet,
    /// No discovery source produced the library.
    ResourceNotFound,
    /// The configuration layer could not resolve the library.
    ConfigInconsistency,
    /// The server could not be started or exited unsuccessfully.
    LaunchFailure,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::EnvironmentUnmet => "environment requirements not met",
            Self::ResourceNotFound => "library not found",
            Self::ConfigInconsistency => "configuration could not resolve the library",
            Self::LaunchFailure => "server launch failed",
        };
        f.write_str(label)
    }
}

/// Result of running one stage.
///
/// Fields are only readable; an outcome never changes after construction.
/// Every failure halts the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageOutcome {
    succeeded: bool,
    detail: String,
    halt_pipeline: bool,
    failure: Option<FailureKind>,
    notes: Vec<String>,
}

impl StageOutcome {
    /// A passing outcome.
    pub fn passed(detail: impl Into<String>) -> Self {
        Self {
            succeeded: true,
            detail: detail.into(),
            halt_pipeline: false,
            failure: None,
            notes: Vec::new(),
        }
    }

    /// A failing outcome that halts the pipeline.
    pub fn failed(kind: FailureKind, detail: impl Into<String>) -> Self {
        Self {
            succeeded: false,
            detail: detail.into(),
            halt_pipeline: true,
            failure: Some(kind),
            notes: Vec::new(),
        }
    }

    /// Attach per-item lines (e.g. one per passing or missing capability).
    pub fn with_notes(mut self, notes: Vec<String>) -> Self {
        self.notes = notes;
        self
    }

    /// Whether the stage passed.
    pub fn succeeded(&self) -> bool {
        self.succeeded
    }

    /// One-line human-readable summary.
    pub fn detail(&self) -> &str {
        &self.detail
    }

    /// Whether no further stages should run.
    pub fn halt_pipeline(&self) -> bool {
        self.halt_pipeline
    }

    /// Failure category, if the stage failed.
    pub fn failure(&self) -> Option<FailureKind> {
        self.failure
    }

    /// Additional per-item lines.
    pub fn notes(&self) -> &[String] {
        &self.notes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passed_does_not_halt() {
        let outcome = StageOutcome::passed("ok");
        assert!(outcome.succeeded());
        assert!(!outcome.halt_pipeline());
        assert_eq!(outcome.failure(), None);
        assert_eq!(outcome.detail(), "ok");
    }

    #[test]
    fn failed_always_halts() {
        let outcome = StageOutcome::failed(FailureKind::ResourceNotFound, "nothing");
        assert!(!outcome.succeeded());
        assert!(outcome.halt_pipeline());
        assert_eq!(outcome.failure(), Some(FailureKind::ResourceNotFound));
    }

    #[test]
    fn notes_are_kept() {
        let outcome = StageOutcome::failed(FailureKind::EnvironmentUnmet, "missing")
            .with_notes(vec!["asyncio unavailable".into()]);
        assert_eq!(outcome.notes(), ["asyncio unavailable".to_string()]);
    }

    #[test]
    fn failure_kind_display() {
        assert!(FailureKind::LaunchFailure.to_string().contains("launch"));
    }
}
