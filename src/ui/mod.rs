//! Interactive user interface components.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for interactive terminal usage
//! - [`NonInteractiveUI`] for CI/headless environments
//! - [`MockUI`] for tests
//!
//! # Example
//!
//! ```
//! use everything_preflight::ui::{create_ui, OutputMode};
//!
//! let mut ui = create_ui(false, OutputMode::Quiet);
//! ui.show_header("Everything Search preflight");
//! ui.success("All checks passed");
//! ```

pub mod mock;
pub mod non_interactive;
pub mod output;
pub mod prompts;
pub mod spinner;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use non_interactive::NonInteractiveUI;
pub use output::OutputMode;
pub use prompts::prompt_user;
pub use spinner::ProgressSpinner;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, PreflightTheme};

use crate::error::Result;

/// Everything the pipeline and commands print or ask goes through here.
pub trait UserInterface {
    /// Verbosity this UI was built with.
    fn output_mode(&self) -> OutputMode;

    /// A plain progress line. Dropped in quiet mode.
    fn message(&mut self, msg: &str);

    fn success(&mut self, msg: &str);

    fn warning(&mut self, msg: &str);

    fn error(&mut self, msg: &str);

    /// Ask a free-text question.
    fn prompt(&mut self, prompt: &Prompt) -> Result<String>;

    /// Show that something is running until the handle is finished.
    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle>;

    /// A banner between `=` rules.
    fn show_header(&mut self, title: &str);

    /// An indented suggestion such as a command to type. Dropped in quiet mode.
    fn show_hint(&mut self, hint: &str);
}

/// A running spinner. Finishing it prints its final line.
pub trait SpinnerHandle {
    fn finish_success(&mut self, msg: &str);

    fn finish_error(&mut self, msg: &str);
}

/// A free-text question to show to the user.
#[derive(Debug, Clone)]
pub struct Prompt {
    /// Unique key for the prompt (used for overrides and test lookup).
    pub key: String,
    /// The question to display.
    pub question: String,
    /// Answer used if the user just presses enter.
    pub default: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_creation() {
        let prompt = Prompt {
            key: "launch_server".to_string(),
            question: "Start now?".to_string(),
            default: Some("n".to_string()),
        };
        assert_eq!(prompt.key, "launch_server");
        assert_eq!(prompt.default.as_deref(), Some("n"));
    }
}
