//! # tarpipe Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! This file is the entry point of the tarpipe CLI, a simple tar archiver
//! that streams archives through standard input and output. It handles:
//! - Command-line argument parsing using Clap
//! - Validating the flags into a `RunConfig`
//! - Setting up logging (always on stderr; stdout may carry archive data)
//! - Routing execution to the create, extract or version handler
//!
//! ## Examples
//!
//! ```bash
//! # Archive a directory
//! tarpipe -c ./project > project.tar
//!
//! # Unpack into a directory, with info-level logging
//! tarpipe --verbose -x out/ < project.tar
//!
//! # Copy a tree between directories
//! tarpipe -c src | (cd /tmp && tarpipe -x)
//! ```
//!
//! Every failure prints `Error: ...` to stderr and exits with status 1.
//!
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

mod commands; // Run mode handlers (create, extract, version)
mod common; // Archive, filesystem and system utilities
mod core; // Configuration and error types

use crate::core::config::{Mode, RunConfig};
use crate::core::error::Result;

/// Top-level command-line arguments.
#[derive(Parser, Debug)]
#[command(
    name = "tarpipe",
    about = "Simple TAR archiver: writes a tar stream to stdout (-c) or unpacks one from stdin (-x)",
    disable_version_flag = true
)]
struct Cli {
    /// Create archive mode: archive SOURCE to stdout.
    #[arg(short = 'c')]
    create: bool,
    /// Extract archive mode: unpack stdin into DEST (default ".").
    #[arg(short = 'x')]
    extract: bool,
    /// Print version and exit.
    #[arg(short = 'v')]
    print_version: bool,
    /// Increase log verbosity on stderr (repeatable).
    #[arg(long, action = clap::ArgAction::Count)]
    verbose: u8,
    /// SOURCE directory for -c, or DEST directory for -x.
    #[arg(value_name = "PATH")]
    paths: Vec<PathBuf>,
}

fn main() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help is reported through this path too and is not a failure.
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    if let Err(e) = run(cli) {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    let config = RunConfig::from_parts(cli.create, cli.extract, cli.print_version, cli.paths)?;
    match config.mode {
        Mode::Version => commands::version::handle_version(),
        Mode::Create { source } => commands::create::handle_create(&source),
        Mode::Extract { destination } => commands::extract::handle_extract(&destination),
    }
}
