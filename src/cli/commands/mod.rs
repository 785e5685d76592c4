//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. This allows:
//! - Single binary with subcommands (`everything-preflight run`, `locate`)
//! - Shared config loading
//! - Consistent global flag handling

pub mod dispatcher;
pub mod locate;
pub mod remedies;
pub mod run;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
