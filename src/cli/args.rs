//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// everything-preflight - Check and start the Everything Search MCP server.
#[derive(Debug, Parser)]
#[command(name = "everything-preflight")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides default preflight.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run all checks and offer to start the server (default)
    Run(RunArgs),

    /// Only look for the Everything SDK DLL
    Locate(LocateArgs),

    /// Show how to install or point at the SDK DLL
    Remedies(RemediesArgs),
}

/// Arguments for the `run` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct RunArgs {
    /// Start the server without asking
    #[arg(short, long)]
    pub yes: bool,

    /// Never start the server; print manual instructions instead
    #[arg(long, conflicts_with = "yes")]
    pub no_launch: bool,

    /// Use defaults, no prompts
    #[arg(long)]
    pub non_interactive: bool,
}

/// Arguments for the `locate` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct LocateArgs {}

/// Arguments for the `remedies` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct RemediesArgs {}
