// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `frontdoor-validate`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "frontdoor-validate",
    version,
    about = "Check a front door configuration for cross-section consistency.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the config file (TOML).
    ///
    /// Default: `$FRONTDOOR_CONFIG`, or `FrontDoor.toml` in the current
    /// working directory.
    #[arg(long, value_name = "PATH")]
    pub config: Option<String>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `FRONTDOOR_VALIDATE_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Skip name/host-name format checks; only check cross references.
    #[arg(long)]
    pub relational_only: bool,

    /// Print a summary of the topology once validation succeeds.
    #[arg(long)]
    pub print: bool,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
