//! Pipeline orchestration.

use std::path::{Path, PathBuf};

use crate::checks::{
    CapabilityGate, ConfigOracle, FailureKind, InterpreterProbe, RuntimeProbe, StageOutcome,
    VersionGate,
};
use crate::config::{PreflightConfig, SdkConfigResolver, SdkSettings};
use crate::discovery::{DiscoveryResult, LibraryLocator};
use crate::remediation::RemediationAdvisor;
use crate::shell::{LaunchResult, LaunchSpec, ServerLauncher};
use crate::ui::{Prompt, UserInterface};

use super::state::{PipelineState, Stage};

/// Prompt key for the launch confirmation.
pub const LAUNCH_PROMPT_KEY: &str = "launch_server";

/// Banner shown at the start of a run.
const BANNER: &str = "MCP Everything Search Server - Quick Start";

/// Whether a confirmation answer means yes.
///
/// Accepts `y`, `yes` and `是`, ignoring case and surrounding whitespace.
pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes" | "是")
}

/// How the confirmation gate behaves.
#[derive(Debug, Clone, Copy, Default)]
pub struct PipelineOptions {
    /// Launch without asking.
    pub assume_yes: bool,
    /// Never launch; print manual instructions instead.
    pub no_launch: bool,
}

/// Everything a run observed, in order.
#[derive(Debug, Clone)]
pub struct PipelineReport {
    /// Every state visited, starting with `Start`.
    pub states: Vec<PipelineState>,
    /// Outcome of each stage that ran.
    pub outcomes: Vec<(Stage, StageOutcome)>,
    /// Where discovery found the library.
    pub discovery: Option<DiscoveryResult>,
    /// What the configuration layer resolved.
    pub resolved: Option<PathBuf>,
    /// The server's captured result, if it ran.
    pub launch: Option<LaunchResult>,
}

impl PipelineReport {
    fn new() -> Self {
        Self {
            states: vec![PipelineState::Start],
            outcomes: Vec::new(),
            discovery: None,
            resolved: None,
            launch: None,
        }
    }

    /// The state the run ended in.
    pub fn final_state(&self) -> PipelineState {
        self.states
            .last()
            .copied()
            .unwrap_or(PipelineState::Start)
    }

    /// Outcome of a given stage, if it ran.
    pub fn outcome(&self, stage: Stage) -> Option<&StageOutcome> {
        self.outcomes
            .iter()
            .find(|(s, _)| *s == stage)
            .map(|(_, outcome)| outcome)
    }

    /// Category of the first failure, if any stage failed.
    pub fn failure(&self) -> Option<FailureKind> {
        self.outcomes.iter().find_map(|(_, o)| o.failure())
    }

    /// Whether the run ended in `Aborted`.
    pub fn aborted(&self) -> bool {
        self.final_state() == PipelineState::Aborted
    }

    fn advance(&mut self, state: PipelineState) {
        tracing::debug!("Pipeline state: {:?}", state);
        self.states.push(state);
    }
}

/// Runs the gates in order and, on success, offers to launch the server.
///
/// Every collaborator is injected, so each can be replaced in tests. Stages
/// run strictly one after another; none is retried.
pub struct Orchestrator {
    runtime: Box<dyn RuntimeProbe>,
    locator: LibraryLocator,
    oracle: ConfigOracle,
    launcher: ServerLauncher,
    sdk: SdkSettings,
    options: PipelineOptions,
}

impl Orchestrator {
    /// Assemble a pipeline from its parts.
    pub fn new(
        runtime: Box<dyn RuntimeProbe>,
        locator: LibraryLocator,
        oracle: ConfigOracle,
        launcher: ServerLauncher,
        sdk: SdkSettings,
    ) -> Self {
        Self {
            runtime,
            locator,
            oracle,
            launcher,
            sdk,
            options: PipelineOptions::default(),
        }
    }

    /// Wire the real interpreter, filesystem and resolver from configuration.
    pub fn from_config(project_root: &Path, cwd: &Path, config: &PreflightConfig) -> Self {
        Self::new(
            Box::new(InterpreterProbe::new(&config.server.interpreter)),
            LibraryLocator::from_settings(cwd, &config.sdk),
            ConfigOracle::new(Box::new(SdkConfigResolver::new(config.sdk.clone()))),
            ServerLauncher::new(LaunchSpec::from_settings(project_root, &config.server)),
            config.sdk.clone(),
        )
    }

    /// Set confirmation behavior.
    pub fn with_options(mut self, options: PipelineOptions) -> Self {
        self.options = options;
        self
    }

    /// Run the whole pipeline.
    ///
    /// Never fails: every stage error is recorded in the report.
    pub fn run(&self, ui: &mut dyn UserInterface) -> PipelineReport {
        let mut report = PipelineReport::new();
        ui.show_header(BANNER);

        ui.message("Checking Python version...");
        let outcome = VersionGate::check(self.runtime.as_ref());
        if !record(ui, &mut report, Stage::Version, outcome) {
            return abort(report);
        }
        report.advance(PipelineState::VersionChecked);

        ui.message("\nChecking dependencies...");
        let outcome = CapabilityGate::check(self.runtime.as_ref());
        if !record(ui, &mut report, Stage::Capabilities, outcome) {
            return abort(report);
        }
        report.advance(PipelineState::DependenciesChecked);

        ui.message("\nLooking for the Everything SDK DLL...");
        let Some(found) = self.locator.locate() else {
            let outcome = StageOutcome::failed(
                FailureKind::ResourceNotFound,
                "Everything SDK DLL not found",
            );
            record(ui, &mut report, Stage::Discovery, outcome);
            RemediationAdvisor::new(&self.sdk).report(ui);
            return abort(report);
        };
        let outcome = StageOutcome::passed(format!(
            "Found DLL via {}: {}",
            found.kind(),
            found.path.display()
        ));
        record(ui, &mut report, Stage::Discovery, outcome);
        report.discovery = Some(found);
        report.advance(PipelineState::LibraryLocated);

        ui.message("\nTesting configuration...");
        let (outcome, resolved) = self.oracle.check();
        if !record(ui, &mut report, Stage::Configuration, outcome) {
            return abort(report);
        }
        report.resolved = resolved;
        report.advance(PipelineState::ConfigValidated);

        ui.success("\nAll checks passed!");
        if let Some(found) = &report.discovery {
            ui.message(&format!(
                "Everything SDK DLL location: {}",
                found.path.display()
            ));
        }

        report.advance(PipelineState::AwaitingConfirmation);
        if self.confirm_launch(ui) {
            report.advance(PipelineState::Launching);
            self.launch(ui, &mut report);
        } else {
            report.advance(PipelineState::ManualInstructionsShown);
            self.show_manual_instructions(ui);
        }

        report
    }

    fn confirm_launch(&self, ui: &mut dyn UserInterface) -> bool {
        if self.options.no_launch {
            return false;
        }
        if self.options.assume_yes {
            return true;
        }

        let prompt = Prompt {
            key: LAUNCH_PROMPT_KEY.to_string(),
            question: "Start the MCP server now? (y/n)".to_string(),
            default: Some("n".to_string()),
        };
        match ui.prompt(&prompt) {
            Ok(answer) => is_affirmative(&answer),
            Err(e) => {
                ui.warning(&format!("Could not read answer: {}", e));
                false
            }
        }
    }

    fn launch(&self, ui: &mut dyn UserInterface, report: &mut PipelineReport) {
        let spec = self.launcher.spec();
        ui.message("\nStarting MCP server...");
        ui.message(&format!("Command: {}", spec.command_line()));

        let mut spinner = ui.start_spinner("Waiting for the server to exit...");
        let outcome = match self.launcher.launch() {
            Ok(result) => {
                let outcome = if result.success() {
                    spinner.finish_success("Server started successfully");
                    StageOutcome::passed("Server exited cleanly")
                } else {
                    let detail = match result.exit_code {
                        Some(code) => format!("Server failed to start (exit code {})", code),
                        None => "Server failed to start (terminated by signal)".to_string(),
                    };
                    spinner.finish_error(&detail);
                    StageOutcome::failed(FailureKind::LaunchFailure, detail)
                };

                if ui.output_mode().shows_command_output() && !result.stdout.is_empty() {
                    ui.message(result.stdout.trim_end());
                }
                if !outcome.succeeded() && !result.stderr.trim().is_empty() {
                    ui.message("   Error output:");
                    for line in result.stderr.trim_end().lines() {
                        ui.message(&format!("   {}", line));
                    }
                }

                report.launch = Some(result);
                outcome
            }
            Err(e) => {
                let detail = format!("Error while starting the server: {}", e);
                spinner.finish_error(&detail);
                StageOutcome::failed(FailureKind::LaunchFailure, detail)
            }
        };

        report.outcomes.push((Stage::Launch, outcome));
    }

    fn show_manual_instructions(&self, ui: &mut dyn UserInterface) {
        let spec = self.launcher.spec();
        ui.message("\nTo start the server manually, run:");
        ui.show_hint(&format!("cd {}", spec.working_dir.display()));
        ui.show_hint(&spec.command_line());
    }
}

/// Print and store an outcome. Returns whether the stage passed.
fn record(
    ui: &mut dyn UserInterface,
    report: &mut PipelineReport,
    stage: Stage,
    outcome: StageOutcome,
) -> bool {
    for note in outcome.notes() {
        ui.message(&format!("  - {}", note));
    }
    if outcome.succeeded() {
        ui.success(outcome.detail());
    } else {
        ui.error(outcome.detail());
    }

    let passed = outcome.succeeded();
    tracing::debug!("Stage {} passed: {}", stage, passed);
    report.outcomes.push((stage, outcome));
    passed
}

fn abort(mut report: PipelineReport) -> PipelineReport {
    report.advance(PipelineState::Aborted);
    report
}
