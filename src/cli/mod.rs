//! Command-line parsing for the finance-cat report job.
//!
//! Argument parsing stays here; the pipeline only ever sees a `RunConfig`.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "finance-cat", version, about = "Market quotes + a cat, rendered into a README")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch quotes and an image, then overwrite the report file.
    Update(RunArgs),
    /// Same as `update`, but print the report to stdout instead of writing it.
    Preview(RunArgs),
}

/// Options shared by all subcommands. Flags win over the config file.
#[derive(Debug, Parser, Clone, Default)]
pub struct RunArgs {
    /// JSON config file (instruments, output path, lookback window, timezone).
    #[arg(short = 'c', long, value_name = "JSON")]
    pub config: Option<PathBuf>,

    /// Report file to overwrite.
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// Calendar days of history requested per instrument.
    #[arg(long)]
    pub lookback_days: Option<u32>,
}
