// Declare modules
pub mod cli;
pub mod config;
pub mod error;
pub mod formatter;
pub mod generator;
pub mod models;
pub mod pattern;
pub mod replicator;
pub mod scanner;

use anyhow::Result;
use clap::Parser;
use std::path::Path;

use self::cli::{Cli, Command};
use self::config::resolve_config;
use self::error::FileOpsError;
use self::formatter::OutputGenerator;
use self::models::RuntimeConfig;
use self::scanner::Scanner;

/// Initializes components and runs the requested action.
pub fn run() -> Result<()> {
    // 1. Parse Args
    let args = Cli::parse();

    // 2. Logging
    init_logging(args.verbose);

    // 3. Resolve Configuration
    let config = resolve_config(&args)?;
    log::debug!("Resolved configuration: {:?}", config);

    // 4. Dispatch
    execute(&args.command, &config)
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_target(false)
        .init();
}

/// Runs one action against the resolved configuration.
///
/// Warnings (nothing selected, nothing matched) are logged and count as
/// success; every other failure is returned to the caller.
pub fn execute(command: &Command, config: &RuntimeConfig) -> Result<()> {
    if let Some(warning) = missing_selection(command, config) {
        log::warn!("{}", warning);
        return Ok(());
    }

    let dir = config.target_directory.as_deref();
    let source = config.target_file.as_deref();
    let outcome = match (command, dir, source) {
        (Command::Generate { .. }, Some(dir), Some(source)) => run_generate(source, dir, config),
        (Command::Replicate { .. }, Some(dir), _) => run_replicate(dir, config),
        (Command::Scan { .. }, Some(dir), _) => run_scan(dir, config),
        // Ruled out by missing_selection
        _ => return Ok(()),
    };

    match outcome {
        Err(err) if err.is_warning() => {
            log::warn!("{}", err);
            Ok(())
        }
        other => other.map_err(anyhow::Error::from),
    }
}

/// First selection the command still needs. Generation asks for the source
/// file before the directory.
fn missing_selection(command: &Command, config: &RuntimeConfig) -> Option<&'static str> {
    if matches!(command, Command::Generate { .. }) && config.target_file.is_none() {
        return Some(SELECT_FILE_WARNING);
    }
    if config.target_directory.is_none() {
        return Some(SELECT_DIRECTORY_WARNING);
    }
    None
}

const SELECT_FILE_WARNING: &str = "Please select a valid target file!";
const SELECT_DIRECTORY_WARNING: &str = "Please select a valid target directory!";

fn run_generate(source: &Path, dir: &Path, config: &RuntimeConfig) -> Result<(), FileOpsError> {
    let report = generator::generate(source, dir, &config.pattern)?;
    log::info!("{}", OutputGenerator::generation_summary(&report, dir));
    Ok(())
}

fn run_replicate(dir: &Path, config: &RuntimeConfig) -> Result<(), FileOpsError> {
    let report = replicator::replicate(dir, &config.pattern)?;
    log::info!("{}", OutputGenerator::replication_summary(&report, dir));
    Ok(())
}

fn run_scan(dir: &Path, config: &RuntimeConfig) -> Result<(), FileOpsError> {
    let matches = Scanner::new(dir, &config.pattern).scan()?;
    let newest = matches.most_recent()?;

    println!("{}", OutputGenerator::generate_listing(&matches, newest));
    log::info!(
        "{} file(s) match {}; most recent is {}",
        matches.len(),
        config.pattern,
        newest.name()
    );
    Ok(())
}
