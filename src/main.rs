//! mlc-migrate: markdown-link-check to linkspector configuration migration
//!
//! This is the main entry point for the mlc-migrate binary. It parses the CLI,
//! loads the source configuration, translates it, and writes the result.
//!
//! # I/O Architecture
//!
//! - **stdout**: Only the generated YAML, so the output can be redirected
//!   straight into `.linkspector.yml`
//! - **stderr**: Conversion warnings, errors, and debug logging

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use mlc_migrate::{
    cli::Cli,
    config::{self, SourceLoader},
    report, translate,
};
use tracing::{debug, info};

fn main() -> ExitCode {
    // Parse CLI arguments first (before any other initialization)
    let cli = Cli::parse();

    if let Err(e) = init_tracing(cli.verbose) {
        eprintln!("Error: {e:#}");
        return ExitCode::FAILURE;
    }

    debug!("Parsed CLI arguments: {:?}", cli);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    // Load failures end the run before anything is translated
    let source = SourceLoader::new().load(&cli.input_file)?;

    let (linkspector, warnings) = translate::translate(&source);
    info!(
        "Converted {:?} with {} warnings",
        cli.input_file,
        warnings.len()
    );

    if !cli.quiet {
        // The lead-in only makes sense when the YAML follows on the terminal
        let yaml_follows = cli.output.is_none();
        report::write_warnings(&mut std::io::stderr().lock(), &warnings, yaml_follows)
            .context("Failed to write warnings")?;
    }

    config::write_output(&linkspector, cli.output.as_deref())?;
    Ok(())
}

/// Initialize the tracing subscriber for debug/development logging.
///
/// Logs go to stderr so stdout carries only YAML.
///
/// # Verbosity Levels
/// - 0 (default): `RUST_LOG`, or only warnings and errors
/// - 1 (-v): Info level
/// - 2 (-vv): Debug level
/// - 3+ (-vvv): Trace level
fn init_tracing(verbose: u8) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init()
        .context("Failed to initialize tracing subscriber")?;

    Ok(())
}
