//! Recording UI for tests.
//!
//! # Example
//!
//! ```
//! use everything_preflight::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.message("Checking Python version...");
//! ui.success("Python version: 3.12.1");
//!
//! assert!(ui.has_message("Checking Python"));
//! assert!(ui.has_success("3.12.1"));
//! ```

use std::collections::HashMap;

use crate::error::{PreflightError, Result};

use super::{OutputMode, Prompt, SpinnerHandle, UserInterface};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Message,
    Success,
    Warning,
    Error,
    Header,
    Hint,
    Spinner,
}

/// Records every line in order and answers prompts from canned responses.
#[derive(Debug, Default)]
pub struct MockUI {
    lines: Vec<(Kind, String)>,
    responses: HashMap<String, String>,
    prompts_shown: Vec<String>,
    prompts_fail: bool,
}

impl MockUI {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer the prompt with `key`. Unanswered prompts get their default.
    pub fn set_prompt_response(&mut self, key: &str, response: &str) {
        self.responses.insert(key.to_string(), response.to_string());
    }

    /// Make every prompt fail as if the terminal had closed.
    pub fn fail_prompts(&mut self) {
        self.prompts_fail = true;
    }

    /// Keys of the prompts asked, in order.
    pub fn prompts_shown(&self) -> &[String] {
        &self.prompts_shown
    }

    pub fn headers(&self) -> Vec<String> {
        self.of(Kind::Header)
    }

    /// Messages of the spinners started.
    pub fn spinners(&self) -> Vec<String> {
        self.of(Kind::Spinner)
    }

    pub fn has_message(&self, needle: &str) -> bool {
        self.has(Kind::Message, needle)
    }

    pub fn has_success(&self, needle: &str) -> bool {
        self.has(Kind::Success, needle)
    }

    pub fn has_warning(&self, needle: &str) -> bool {
        self.has(Kind::Warning, needle)
    }

    pub fn has_error(&self, needle: &str) -> bool {
        self.has(Kind::Error, needle)
    }

    pub fn has_hint(&self, needle: &str) -> bool {
        self.has(Kind::Hint, needle)
    }

    fn of(&self, kind: Kind) -> Vec<String> {
        self.lines
            .iter()
            .filter(|(k, _)| *k == kind)
            .map(|(_, line)| line.clone())
            .collect()
    }

    fn has(&self, kind: Kind, needle: &str) -> bool {
        self.lines
            .iter()
            .any(|(k, line)| *k == kind && line.contains(needle))
    }

    fn push(&mut self, kind: Kind, line: &str) {
        self.lines.push((kind, line.to_string()));
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        OutputMode::Normal
    }

    fn message(&mut self, msg: &str) {
        self.push(Kind::Message, msg);
    }

    fn success(&mut self, msg: &str) {
        self.push(Kind::Success, msg);
    }

    fn warning(&mut self, msg: &str) {
        self.push(Kind::Warning, msg);
    }

    fn error(&mut self, msg: &str) {
        self.push(Kind::Error, msg);
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<String> {
        self.prompts_shown.push(prompt.key.clone());
        if self.prompts_fail {
            return Err(PreflightError::Io(std::io::Error::other("input closed")));
        }

        Ok(self
            .responses
            .get(&prompt.key)
            .or(prompt.default.as_ref())
            .cloned()
            .unwrap_or_default())
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        self.push(Kind::Spinner, message);
        Box::new(SilentSpinner)
    }

    fn show_header(&mut self, title: &str) {
        self.push(Kind::Header, title);
    }

    fn show_hint(&mut self, hint: &str) {
        self.push(Kind::Hint, hint);
    }
}

struct SilentSpinner;

impl SpinnerHandle for SilentSpinner {
    fn finish_success(&mut self, _msg: &str) {}

    fn finish_error(&mut self, _msg: &str) {}
}
