//! # tarpipe Extract Command
//!
//! File: cli/src/commands/extract.rs
//!
//! ## Overview
//!
//! Handles `tarpipe -x [DEST]`: unpacks the archive read from standard input
//! under `DEST` (the current directory by default).
//!
//! ```bash
//! tarpipe -x out/ < project.tar
//! gzip -dc project.tar.gz | tarpipe -x
//! ```
//!
use crate::common::{archive::extract::extract_archive, system};
use crate::core::error::Result;
use anyhow::Context;
use std::io::{self, BufReader};
use std::path::Path;
use tracing::info;

/// # Handle Extract (`handle_extract`)
///
/// Reads a tar archive from stdin and recreates it under `destination`.
///
/// ## Arguments
///
/// * `destination` - The directory to unpack into (`.` when none was given).
///
/// ## Errors
///
/// Returns an `Err` if stdin is a terminal, the stream is malformed, or a
/// directory or file cannot be created or written.
pub fn handle_extract(destination: &Path) -> Result<()> {
    let stdin = io::stdin();
    system::ensure_not_terminal(&stdin, "stdin", "pipe tar data into tarpipe -x")?;

    info!("Extracting archive into {}", destination.display());
    let stats = extract_archive(BufReader::new(stdin.lock()), destination)
        .context("error occurred when extracting tar")?;
    info!("Extracted into {}: {}", destination.display(), stats);
    Ok(())
}
