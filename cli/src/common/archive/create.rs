//! # tarpipe Archive Writer (`common::archive::create`)
//!
//! File: cli/src/common/archive/create.rs
//!
//! ## Overview
//!
//! Streams a directory tree into a tar archive written to any `Write` sink.
//!
//! ## Architecture
//!
//! - The source path is stat'ed first; a missing source fails before a
//!   single byte reaches the sink.
//! - `walkdir` visits the tree depth-first, the root first, with each
//!   directory's entries sorted by file name.
//! - Every node becomes one USTAR header built from its metadata, named by
//!   its walked path (see `member_name`).
//! - Regular file bodies are streamed straight from the open file into the
//!   `tar::Builder`; each file handle is closed before the next node.
//! - The first error stops the walk. Dropping the builder still writes the
//!   archive trailer, and the sink is dropped after it.
//!
use super::{member_name, ArchiveStats, EntryKind};
use crate::core::error::{Result, TarError};
use anyhow::Context;
use std::fs::{self, File, Metadata};
use std::io::{self, Read, Write};
use std::path::Path;
use tar::{Builder, EntryType, Header, HeaderMode};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// # Create Archive (`create_archive`)
///
/// Writes a tar archive of `source` (and everything below it) to `sink`.
///
/// The sink is taken by value: it is finished, flushed and dropped on
/// success, and dropped after the archive trailer on failure.
///
/// ## Arguments
///
/// * `sink` - Where the archive bytes go (stdout in the CLI).
/// * `source` - The file or directory to archive. It must exist.
///
/// ## Returns
///
/// * `Result<ArchiveStats>` - Counts of the entries written.
///
/// ## Errors
///
/// - `TarError::SourceNotFound` if `source` cannot be stat'ed. Nothing is written.
/// - `TarError::UnsupportedFileType` if the tree contains a socket.
/// - Any walk, open, read or write failure, with the path involved as context.
/// - `TarError::BodySizeMismatch` if a file shrank while it was being read.
pub fn create_archive<W: Write>(sink: W, source: &Path) -> Result<ArchiveStats> {
    fs::metadata(source).map_err(|e| TarError::SourceNotFound {
        path: source.to_path_buf(),
        source: e,
    })?;

    let mut builder = Builder::new(sink);
    let stats = append_tree(&mut builder, source)?;

    let mut sink = builder
        .into_inner()
        .context("Failed to finalize tar archive structure")?;
    sink.flush().context("Failed to flush archive output")?;
    Ok(stats)
}

/// # Append Tree (`append_tree`)
///
/// Walks `source` and appends one entry per visited node.
///
/// The root is inspected without following it: a `source` that is itself a
/// symlink is archived as a single symlink entry and not descended into.
/// Below the root, links are never followed.
///
/// ## Arguments
///
/// * `builder` - The tar encoder entries are appended to.
/// * `source` - The path given on the command line; every member name starts with it.
///
/// ## Returns
///
/// * `Result<ArchiveStats>` - Counts of what was appended.
fn append_tree<W: Write>(builder: &mut Builder<W>, source: &Path) -> Result<ArchiveStats> {
    let mut stats = ArchiveStats::default();
    let mut warned_stripped = false;

    let walker = WalkDir::new(source)
        .follow_root_links(false)
        .sort_by_file_name();
    for entry in walker {
        let entry = entry.with_context(|| format!("Failed to walk {:?}", source))?;
        let path = entry.path();
        // lstat semantics, the root included
        let metadata = entry
            .metadata()
            .with_context(|| format!("Failed to read metadata of {:?}", path))?;

        let (name, stripped) = member_name(path);
        if stripped && !warned_stripped {
            warn!("Removing leading '/' and '../' from member names");
            warned_stripped = true;
        }

        let (kind, size) = append_node(builder, path, &name, &metadata)?;
        debug!("Added {:?} ({:?}, {} bytes)", name, kind, size);
        stats.record(kind, size);
    }
    Ok(stats)
}

/// # Append Node (`append_node`)
///
/// Writes the header for one node, followed by its body when it is a
/// regular file. Symlinks carry their target as the link name; other
/// non-regular nodes get a bare header.
///
/// ## Arguments
///
/// * `builder` - The tar encoder.
/// * `path` - Where the node lives on disk.
/// * `name` - The member name to store (see `member_name`).
/// * `metadata` - The node's lstat metadata.
///
/// ## Returns
///
/// * `Result<(EntryKind, u64)>` - The kind written and its body length.
///
/// ## Errors
///
/// - `TarError::UnsupportedFileType` for sockets, which have no tar type.
/// - Open, read-link or write failures, with `path` as context.
/// - `TarError::BodySizeMismatch` if a file shrank while it was being read.
fn append_node<W: Write>(
    builder: &mut Builder<W>,
    path: &Path,
    name: &Path,
    metadata: &Metadata,
) -> Result<(EntryKind, u64)> {
    reject_unsupported(path, metadata)?;

    let mut header = Header::new_ustar();
    header.set_metadata_in_mode(metadata, HeaderMode::Complete);
    let kind = EntryKind::from_entry_type(header.entry_type());

    match kind {
        EntryKind::Regular => {
            let expected = header.size().context("Invalid size in tar header")?;
            let file =
                File::open(path).with_context(|| format!("Failed to open {:?}", path))?;
            let mut body = BodyReader::new(file, expected);
            builder
                .append_data(&mut header, name, &mut body)
                .with_context(|| format!("Failed to write {:?} to the archive", path))?;
            if body.copied != expected {
                return Err(TarError::BodySizeMismatch {
                    path: path.to_path_buf(),
                    expected,
                    actual: body.copied,
                }
                .into());
            }
            Ok((kind, expected))
        }
        EntryKind::Other(EntryType::Symlink) => {
            let target = fs::read_link(path)
                .with_context(|| format!("Failed to read link target of {:?}", path))?;
            header.set_size(0);
            // append_link falls back to a GNU long-link record for long targets
            builder
                .append_link(&mut header, name, &target)
                .with_context(|| format!("Failed to write {:?} to the archive", path))?;
            Ok((kind, 0))
        }
        EntryKind::Directory | EntryKind::Other(_) => {
            header.set_size(0);
            builder
                .append_data(&mut header, name, io::empty())
                .with_context(|| format!("Failed to write {:?} to the archive", path))?;
            Ok((kind, 0))
        }
    }
}

/// Fails for node types the tar format cannot represent.
fn reject_unsupported(path: &Path, metadata: &Metadata) -> Result<()> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::FileTypeExt;
        if metadata.file_type().is_socket() {
            return Err(TarError::UnsupportedFileType {
                path: path.to_path_buf(),
                kind: "socket",
            }
            .into());
        }
    }
    #[cfg(not(unix))]
    let _ = (path, metadata);
    Ok(())
}

/// Reads at most `limit` bytes from a file and counts what was actually read,
/// so the body written never exceeds the size recorded in its header.
struct BodyReader<R> {
    inner: io::Take<R>,
    copied: u64,
}

impl<R: Read> BodyReader<R> {
    /// Wraps `inner`, allowing at most `limit` bytes through.
    fn new(inner: R, limit: u64) -> Self {
        BodyReader {
            inner: inner.take(limit),
            copied: 0,
        }
    }
}

impl<R: Read> Read for BodyReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        self.copied += n as u64;
        Ok(n)
    }
}
