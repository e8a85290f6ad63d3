//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - resolves the run configuration (defaults < config file < flags)
//! - runs the report pipeline
//! - writes or prints the report

use clap::Parser;
use tracing::{info, warn};

use crate::cli::{Command, RunArgs};
use crate::domain::{MAX_LOOKBACK_DAYS, MIN_LOOKBACK_DAYS, RunConfig};
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `finance-cat` binary.
pub fn run() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    crate::logging::init();

    // A bare `finance-cat` (the scheduled invocation) means `update`.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Update(args) => handle_update(&args),
        Command::Preview(args) => handle_preview(&args),
    }
}

fn handle_update(args: &RunArgs) -> Result<(), AppError> {
    let config = resolve_config(args)?;
    let run = pipeline::run_report(&config)?;
    log_failures(&run);

    crate::io::write_report(&config.output, &run.document)?;
    info!(path = %config.output.display(), good = run.mood.is_good, "update complete");
    Ok(())
}

fn handle_preview(args: &RunArgs) -> Result<(), AppError> {
    let config = resolve_config(args)?;
    let run = pipeline::run_report(&config)?;
    log_failures(&run);

    print!("{}", run.document);
    Ok(())
}

fn log_failures(run: &pipeline::RunOutput) {
    let failed = run.failures().count();
    if failed > 0 {
        warn!(failed, total = run.quotes.len(), "report contains flat rows for failed instruments");
    }
}

/// Build the run configuration: defaults, then the config file, then flags.
pub fn resolve_config(args: &RunArgs) -> Result<RunConfig, AppError> {
    let mut config = RunConfig::default();

    if let Some(path) = &args.config {
        config = crate::io::read_config_file(path)?.apply(config);
    }
    if let Some(output) = &args.output {
        config.output = output.clone();
    }
    if let Some(days) = args.lookback_days {
        config.lookback_days = days;
    }

    validate_config(&config)?;
    Ok(config)
}

fn validate_config(config: &RunConfig) -> Result<(), AppError> {
    if config.instruments.is_empty() {
        return Err(AppError::new(2, "No instruments configured."));
    }
    if !(MIN_LOOKBACK_DAYS..=MAX_LOOKBACK_DAYS).contains(&config.lookback_days) {
        return Err(AppError::new(
            2,
            format!(
                "Lookback window of {} days is out of range; use {MIN_LOOKBACK_DAYS}..={MAX_LOOKBACK_DAYS}.",
                config.lookback_days
            ),
        ));
    }
    if let Some(inst) = config.instruments.iter().find(|i| i.symbol.trim().is_empty()) {
        return Err(AppError::new(2, format!("Instrument '{}' has an empty symbol.", inst.name)));
    }
    Ok(())
}

/// Rewrite argv so `finance-cat` defaults to `finance-cat update`.
///
/// Rules:
/// - `finance-cat`                      -> `finance-cat update`
/// - `finance-cat -o OUT.md ...`        -> `finance-cat update -o OUT.md ...`
/// - `finance-cat --help/--version/-h`  -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("update".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "update" | "preview");
    if is_subcommand {
        return argv;
    }

    if arg1.starts_with('-') {
        argv.insert(1, "update".to_string());
        return argv;
    }

    argv
}
