//! Process execution: capturing child output and launching the server.

pub mod command;
pub mod launcher;
pub mod platform;

pub use command::{command_line, execute, CommandOptions, CommandResult};
pub use launcher::{LaunchResult, LaunchSpec, ServerLauncher};
pub use platform::is_ci;
