//! Remedies command implementation.

use std::path::{Path, PathBuf};

use crate::config::load_config;
use crate::error::Result;
use crate::remediation::RemediationAdvisor;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Prints the remedy list without running any checks.
pub struct RemediesCommand {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
}

impl RemediesCommand {
    /// Create a new remedies command.
    pub fn new(project_root: &Path, config_path: Option<&Path>) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_path: config_path.map(Path::to_path_buf),
        }
    }
}

impl Command for RemediesCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = load_config(&self.project_root, self.config_path.as_deref())?;
        RemediationAdvisor::new(&config.sdk).report(ui);
        Ok(CommandResult::success())
    }
}
