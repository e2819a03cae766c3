//! # tarpipe Archive Reader (`common::archive::extract`)
//!
//! File: cli/src/common/archive/extract.rs
//!
//! ## Overview
//!
//! Reads a tar archive from any `Read` source and recreates its directories
//! and regular files under a destination directory.
//!
//! ## Architecture
//!
//! - Entries are decoded one at a time by `tar::Archive`; end of stream
//!   (including an empty input) ends the loop successfully.
//! - Each entry is dispatched on `EntryKind`:
//!   - **Directory**: created with mode `0755` if nothing exists there yet.
//!     Archived directory modes are not applied.
//!   - **Regular**: parent directories are ensured, the file is opened with
//!     the archived mode bits, its body copied, and the handle closed before
//!     the next entry.
//!   - **Other**: skipped.
//! - Entry names containing `..` are skipped with a warning. Nothing is
//!   written outside the destination.
//! - The first I/O or decoding error aborts; what was already written stays.
//!
use super::{extraction_path, ArchiveStats, EntryKind};
use crate::common::fs::io::{ensure_dir_exists, open_for_extract};
use crate::core::error::Result;
use anyhow::Context;
use std::io::{self, Read};
use std::path::Path;
use tar::{Archive, Entry};
use tracing::{debug, warn};

/// # Extract Archive (`extract_archive`)
///
/// Unpacks the tar stream read from `source` under `dest`. `dest` does not
/// need to exist; it is created along with the first entry that needs it.
///
/// ## Arguments
///
/// * `source` - The tar stream. Dropped when the function returns.
/// * `dest` - The directory to unpack into.
///
/// ## Returns
///
/// * `Result<ArchiveStats>` - Counts of the entries unpacked and skipped.
///
/// ## Errors
///
/// Returns an `Err` for a malformed stream, or if a directory cannot be
/// created, a file cannot be opened, or a body cannot be copied.
pub fn extract_archive<R: Read>(source: R, dest: &Path) -> Result<ArchiveStats> {
    let mut archive = Archive::new(source);
    let mut stats = ArchiveStats::default();

    let entries = archive
        .entries()
        .context("Failed to read tar archive")?;
    for entry in entries {
        let mut entry = entry.context("Failed to read next tar entry")?;
        let name = entry
            .path()
            .context("Invalid entry name in tar header")?
            .into_owned();
        let kind = EntryKind::from_entry_type(entry.header().entry_type());

        let target = match extraction_path(dest, &name) {
            Ok(target) => target,
            Err(e) => {
                warn!("Skipping entry: {}", e);
                stats.other += 1;
                continue;
            }
        };

        match kind {
            EntryKind::Directory => {
                ensure_dir_exists(&target)?;
                stats.record(kind, 0);
            }
            EntryKind::Regular => {
                let written = write_file(&mut entry, &target)?;
                debug!("Extracted {:?} ({} bytes)", target, written);
                stats.record(kind, written);
            }
            EntryKind::Other(entry_type) => {
                debug!("Skipping {:?} entry {:?}", entry_type, name);
                stats.record(kind, 0);
            }
        }
    }
    Ok(stats)
}

/// Copies one regular-file entry to `target`. The file is closed on return.
///
/// Missing parents of `target` are created first, and the file is created
/// with the entry's archived mode bits.
///
/// ## Returns
///
/// * `Result<u64>` - The number of body bytes written.
fn write_file<R: Read>(entry: &mut Entry<'_, R>, target: &Path) -> Result<u64> {
    if let Some(parent) = target.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_dir_exists(parent)?;
        }
    }
    let mode = entry
        .header()
        .mode()
        .with_context(|| format!("Invalid mode in tar header for {:?}", target))?;
    let mut file = open_for_extract(target, mode)?;
    io::copy(entry, &mut file).with_context(|| format!("Failed to write {:?}", target))
}
