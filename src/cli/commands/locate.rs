//! Locate command implementation.
//!
//! The `everything-preflight locate` command runs discovery on its own and
//! reports where the SDK library was found.

use std::path::{Path, PathBuf};

use crate::config::load_config;
use crate::discovery::LibraryLocator;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The locate command implementation.
pub struct LocateCommand {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
}

impl LocateCommand {
    /// Create a new locate command.
    pub fn new(project_root: &Path, config_path: Option<&Path>) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_path: config_path.map(Path::to_path_buf),
        }
    }
}

impl Command for LocateCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = load_config(&self.project_root, self.config_path.as_deref())?;
        let cwd = std::env::current_dir().unwrap_or_else(|_| self.project_root.clone());
        let locator = LibraryLocator::from_settings(&cwd, &config.sdk);

        ui.message(&format!(
            "Searching {} location(s) for {}...",
            locator.sources().len(),
            config.sdk.library_name
        ));
        if ui.output_mode().shows_command_output() {
            for source in locator.sources() {
                ui.message(&format!("  {}: {}", source.kind(), source));
            }
        }

        match locator.locate() {
            Some(found) => {
                ui.success(&format!("Found {}", found.path.display()));
                ui.message(&format!("Source: {} ({})", found.kind(), found.source));
                Ok(CommandResult::success())
            }
            None => {
                ui.error(&format!("{} not found", config.sdk.library_name));
                ui.show_hint("Run 'everything-preflight remedies' for ways to fix this");
                Ok(CommandResult::failure(1))
            }
        }
    }
}
