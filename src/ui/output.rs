//! How much the UI prints.

/// Verbosity picked with `-v` / `-q`.
///
/// Successes, warnings, errors, and banners are printed in every mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Also echo what the server wrote to stdout.
    Verbose,
    #[default]
    Normal,
    /// Drop progress lines and hints.
    Quiet,
}

impl OutputMode {
    /// Pick a mode from the global flags. `--quiet` wins over `--verbose`.
    pub fn from_flags(verbose: bool, quiet: bool) -> Self {
        match (verbose, quiet) {
            (_, true) => Self::Quiet,
            (true, false) => Self::Verbose,
            (false, false) => Self::Normal,
        }
    }

    /// Whether captured child output is echoed.
    pub fn shows_command_output(&self) -> bool {
        matches!(self, Self::Verbose)
    }

    /// Whether plain progress messages and hints are printed.
    pub fn shows_progress(&self) -> bool {
        !matches!(self, Self::Quiet)
    }
}
