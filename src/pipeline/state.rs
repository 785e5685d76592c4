//! Pipeline states and stages.

use std::fmt;

/// Where the pipeline is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PipelineState {
    Start,
    VersionChecked,
    DependenciesChecked,
    LibraryLocated,
    ConfigValidated,
    AwaitingConfirmation,
    /// Terminal: the server was (or was attempted to be) run.
    Launching,
    /// Terminal: the user declined; manual instructions were printed.
    ManualInstructionsShown,
    /// Terminal: a check failed.
    Aborted,
}

/// A step that produces a [`StageOutcome`](crate::checks::StageOutcome).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Version,
    Capabilities,
    Discovery,
    Configuration,
    Launch,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Version => "version",
            Self::Capabilities => "capabilities",
            Self::Discovery => "discovery",
            Self::Configuration => "configuration",
            Self::Launch => "launch",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_display() {
        assert_eq!(Stage::Discovery.to_string(), "discovery");
    }
}
