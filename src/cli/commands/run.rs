//! Run command implementation.
//!
//! The `everything-preflight run` command checks the environment and offers
//! to start the server.

use std::path::{Path, PathBuf};

use crate::cli::args::RunArgs;
use crate::config::load_config;
use crate::error::{PreflightError, Result};
use crate::pipeline::{Orchestrator, PipelineOptions};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The run command implementation.
pub struct RunCommand {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
    args: RunArgs,
}

impl RunCommand {
    /// Create a new run command.
    pub fn new(project_root: &Path, config_path: Option<&Path>, args: RunArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_path: config_path.map(Path::to_path_buf),
            args,
        }
    }

    fn options(&self) -> PipelineOptions {
        PipelineOptions {
            assume_yes: self.args.yes,
            no_launch: self.args.no_launch,
        }
    }
}

impl Command for RunCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = match load_config(&self.project_root, self.config_path.as_deref()) {
            Ok(c) => c,
            Err(PreflightError::ConfigParseError { path, message }) => {
                ui.error(&format!("Parse error in {}: {}", path.display(), message));
                return Ok(CommandResult::failure(1));
            }
            Err(e) => return Err(e),
        };

        let cwd = std::env::current_dir().unwrap_or_else(|_| self.project_root.clone());
        let report = Orchestrator::from_config(&self.project_root, &cwd, &config)
            .with_options(self.options())
            .run(ui);

        tracing::debug!("Pipeline finished in {:?}", report.final_state());

        if report.aborted() {
            Ok(CommandResult::failure(1))
        } else {
            Ok(CommandResult::success())
        }
    }
}
