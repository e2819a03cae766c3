//! # tarpipe Create Command
//!
//! File: cli/src/commands/create.rs
//!
//! ## Overview
//!
//! Handles `tarpipe -c <SOURCE>`: archives `SOURCE` to standard output.
//!
//! Flow:
//! 1. Refuse to run if stdout is an interactive terminal
//! 2. Stream the archive through a buffered, locked stdout
//! 3. Log a summary of what was written
//!
//! ```bash
//! tarpipe -c ./project > project.tar
//! tarpipe -c ./project | ssh host 'tarpipe -x /srv'
//! ```
//!
use crate::common::{archive::create::create_archive, system};
use crate::core::error::Result;
use anyhow::Context;
use std::io::{self, BufWriter};
use std::path::Path;
use tracing::info;

/// # Handle Create (`handle_create`)
///
/// Writes a tar archive of `source` to stdout.
///
/// ## Arguments
///
/// * `source` - The directory (or file) to archive, exactly as given on the
///   command line. It becomes the prefix of every entry name.
///
/// ## Errors
///
/// Returns an `Err` if stdout is a terminal, `source` does not exist, or any
/// read/write fails while archiving.
pub fn handle_create(source: &Path) -> Result<()> {
    let stdout = io::stdout();
    system::ensure_not_terminal(
        &stdout,
        "stdout",
        "redirect the archive to a file or pipe",
    )?;

    info!("Creating archive of {}", source.display());
    let stats = create_archive(BufWriter::new(stdout.lock()), source)
        .context("error occurred when creating tar")?;
    info!("Archived {}: {}", source.display(), stats);
    Ok(())
}
