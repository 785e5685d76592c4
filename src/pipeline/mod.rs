//! The staged preflight pipeline.
//!
//! [`Orchestrator`] runs the gates in a fixed order, stops at the first
//! failure, and on success asks whether to launch the server.
//!
//! ```text
//! Start → VersionChecked → DependenciesChecked → LibraryLocated
//!       → ConfigValidated → AwaitingConfirmation → Launching
//!                                                → ManualInstructionsShown
//! (any check) → Aborted
//! ```

pub mod orchestrator;
pub mod state;

pub use orchestrator::{
    is_affirmative, Orchestrator, PipelineOptions, PipelineReport, LAUNCH_PROMPT_KEY,
};
pub use state::{PipelineState, Stage};
