//! everything-preflight - Pre-flight checks for the Everything Search MCP server.
//!
//! Before the server can run it needs a recent enough interpreter, a couple
//! of interpreter modules, and the Everything SDK library. This crate checks
//! each of those in order, explains how to fix whatever is missing, and
//! offers to start the server once everything is in place.
//!
//! # Modules
//!
//! - [`checks`] - Version, capability, and configuration gates
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading and the configuration-side resolver
//! - [`discovery`] - Priority-ordered search for the SDK library
//! - [`error`] - Error types and result aliases
//! - [`pipeline`] - The orchestrator and its states
//! - [`remediation`] - Remedies for a missing library
//! - [`shell`] - Child process execution and server launch
//! - [`ui`] - Interactive prompts, spinners, and terminal output
//!
//! # Example
//!
//! ```
//! use everything_preflight::discovery::{DiscoverySource, LibraryLocator, MemoryFileSystem};
//!
//! let fs = MemoryFileSystem::new().with_file("/opt/sdk/Everything64.dll");
//! let locator = LibraryLocator::with_probes(
//!     vec![DiscoverySource::GlobPattern("/opt/*/Everything*.dll".to_string())],
//!     fs,
//!     |_| None,
//! );
//! let found = locator.locate().unwrap();
//! assert!(found.path.ends_with("Everything64.dll"));
//! ```

pub mod checks;
pub mod cli;
pub mod config;
pub mod discovery;
pub mod error;
pub mod pipeline;
pub mod remediation;
pub mod shell;
pub mod ui;

pub use error::{PreflightError, Result};
