// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Command-line arguments for `taskboard`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "taskboard",
    version,
    about = "Replay drag-and-drop input against a Kanban board.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the board file (TOML).
    ///
    /// Default: `Taskboard.toml` in the current working directory.
    #[arg(long, value_name = "PATH", default_value = "Taskboard.toml")]
    pub config: String,

    /// Replay script (`[[event]]` entries) to feed into the board.
    ///
    /// Without one the board waits for Ctrl-C.
    #[arg(long, value_name = "PATH")]
    pub script: Option<PathBuf>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `TASKBOARD_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Parse + validate, print the board and its droppables, then exit.
    #[arg(long)]
    pub dry_run: bool,
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

pub fn parse() -> CliArgs {
    CliArgs::parse()
}
