//! # tarpipe Archive Module (`common::archive`)
//!
//! File: cli/src/common/archive/mod.rs
//!
//! ## Overview
//!
//! This module holds the two halves of the archiver and the small set of
//! types they share:
//!
//! - **`create`**: walks a directory tree and streams it into a tar archive.
//! - **`extract`**: reads a tar archive and recreates directories and regular
//!   files under a destination.
//! - **`EntryKind`**: the closed set of entry types the archiver treats
//!   differently (directory, regular file, everything else).
//! - **`ArchiveStats`**: what a run wrote or unpacked, for logging.
//!
//! ## Entry names
//!
//! Entry names are the walked paths, so `tarpipe -c a` stores `a` and
//! `a/f.txt`. The `tar` crate refuses absolute and `..` member names, so
//! `member_name` strips leading `/` and `../` (and folds inner `a/../`) on
//! the way in, and
//! `extraction_path` refuses to write anything outside the destination on the
//! way out.
//!
//! ```rust
//! use crate::common::archive;
//!
//! let stats = archive::create::create_archive(Vec::new(), Path::new("a"))?;
//! let stats = archive::extract::extract_archive(io::stdin().lock(), Path::new("out"))?;
//! ```
//!
use crate::core::error::TarError;
use std::fmt;
use std::path::{Component, Path, PathBuf};
use tar::EntryType;

/// Streams a directory tree into a tar archive.
pub mod create;
/// Recreates directories and regular files from a tar archive.
pub mod extract;

/// How the archiver treats an entry. Everything that is not a directory or a
/// regular file is carried through as `Other` and gets no body on either side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    Regular,
    Other(EntryType),
}

impl EntryKind {
    /// Classifies a tar header type.
    pub fn from_entry_type(entry_type: EntryType) -> Self {
        match entry_type {
            EntryType::Directory => EntryKind::Directory,
            EntryType::Regular => EntryKind::Regular,
            other => EntryKind::Other(other),
        }
    }
}

/// Counters for one create or extract run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ArchiveStats {
    pub directories: u64,
    pub files: u64,
    pub other: u64,
    /// Total body bytes of regular files.
    pub bytes: u64,
}

impl ArchiveStats {
    fn record(&mut self, kind: EntryKind, bytes: u64) {
        match kind {
            EntryKind::Directory => self.directories += 1,
            EntryKind::Regular => {
                self.files += 1;
                self.bytes += bytes;
            }
            EntryKind::Other(_) => self.other += 1,
        }
    }
}

impl fmt::Display for ArchiveStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} directories, {} files ({} bytes), {} other entries",
            self.directories, self.files, self.bytes, self.other
        )
    }
}

/// # Archive Member Name (`member_name`)
///
/// Turns a walked filesystem path into the name stored in the archive.
///
/// The path is kept as-is except for what the tar format cannot carry:
/// - root and drive prefixes are dropped
/// - `.` components are dropped
/// - a `..` after a normal component cancels it (`a/../b` becomes `b`)
/// - a `..` with nothing left to cancel is dropped
///
/// An empty result becomes `.`.
///
/// ## Arguments
///
/// * `path` - A path produced by the directory walk.
///
/// ## Returns
///
/// The member name, and `true` if a leading `/` or `..` had to be removed.
pub fn member_name(path: &Path) -> (PathBuf, bool) {
    let mut name = PathBuf::new();
    let mut depth = 0usize;
    let mut stripped = false;
    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => stripped = true,
            Component::CurDir => {}
            Component::ParentDir if depth > 0 => {
                name.pop();
                depth -= 1;
            }
            Component::ParentDir => stripped = true,
            Component::Normal(part) => {
                name.push(part);
                depth += 1;
            }
        }
    }
    if name.as_os_str().is_empty() {
        name.push(".");
    }
    (name, stripped)
}

/// # Extraction Target (`extraction_path`)
///
/// Joins an archive member name onto `dest`. A leading `/` (or drive prefix)
/// is dropped so absolute names land under `dest`.
///
/// ## Arguments
///
/// * `dest` - The extraction destination.
/// * `name` - The member name read from the archive.
///
/// ## Returns
///
/// The path the entry should be written to.
///
/// ## Errors
///
/// Returns `TarError::UnsafeEntryName` if the name contains a `..` component.
pub fn extraction_path(dest: &Path, name: &Path) -> Result<PathBuf, TarError> {
    let mut relative = PathBuf::new();
    for component in name.components() {
        match component {
            Component::Prefix(_) | Component::RootDir | Component::CurDir => {}
            Component::ParentDir => return Err(TarError::UnsafeEntryName(name.to_path_buf())),
            Component::Normal(part) => relative.push(part),
        }
    }
    if relative.as_os_str().is_empty() {
        return Ok(dest.to_path_buf());
    }
    Ok(dest.join(relative))
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_kind_mapping() {
        assert_eq!(
            EntryKind::from_entry_type(EntryType::Directory),
            EntryKind::Directory
        );
        assert_eq!(
            EntryKind::from_entry_type(EntryType::Regular),
            EntryKind::Regular
        );
        assert_eq!(
            EntryKind::from_entry_type(EntryType::Symlink),
            EntryKind::Other(EntryType::Symlink)
        );
        assert_eq!(
            EntryKind::from_entry_type(EntryType::Fifo),
            EntryKind::Other(EntryType::Fifo)
        );
    }

    #[test]
    fn test_member_name_keeps_relative_paths() {
        assert_eq!(member_name(Path::new("a")), (PathBuf::from("a"), false));
        assert_eq!(
            member_name(Path::new("a/b/f.txt")),
            (PathBuf::from("a/b/f.txt"), false)
        );
        assert_eq!(member_name(Path::new("./a/f")), (PathBuf::from("a/f"), false));
        assert_eq!(member_name(Path::new(".")), (PathBuf::from("."), false));
    }

    #[test]
    fn test_member_name_resolves_inner_parent_dirs() {
        assert_eq!(member_name(Path::new("a/../a")), (PathBuf::from("a"), false));
        assert_eq!(
            member_name(Path::new("a/../a/f.txt")),
            (PathBuf::from("a/f.txt"), false)
        );
        assert_eq!(member_name(Path::new("a/b/../../c")), (PathBuf::from("c"), false));
        assert_eq!(member_name(Path::new("a/../../b")), (PathBuf::from("b"), true));
        assert_eq!(member_name(Path::new("a/..")), (PathBuf::from("."), false));
    }

    #[cfg(unix)]
    #[test]
    fn test_member_name_strips_root_and_parents() {
        assert_eq!(
            member_name(Path::new("/tmp/a/f.txt")),
            (PathBuf::from("tmp/a/f.txt"), true)
        );
        assert_eq!(
            member_name(Path::new("../../a")),
            (PathBuf::from("a"), true)
        );
        assert_eq!(member_name(Path::new("/")), (PathBuf::from("."), true));
    }

    #[test]
    fn test_extraction_path_joins_under_dest() {
        let dest = Path::new("out");
        assert_eq!(
            extraction_path(dest, Path::new("a/f.txt")).unwrap(),
            PathBuf::from("out/a/f.txt")
        );
        assert_eq!(
            extraction_path(dest, Path::new("./a")).unwrap(),
            PathBuf::from("out/a")
        );
        assert_eq!(
            extraction_path(dest, Path::new(".")).unwrap(),
            PathBuf::from("out")
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_extraction_path_drops_root() {
        assert_eq!(
            extraction_path(Path::new("out"), Path::new("/etc/passwd")).unwrap(),
            PathBuf::from("out/etc/passwd")
        );
    }

    #[test]
    fn test_extraction_path_rejects_parent_dirs() {
        let result = extraction_path(Path::new("out"), Path::new("a/../../evil"));
        assert!(matches!(result, Err(TarError::UnsafeEntryName(_))));
    }

    #[test]
    fn test_stats_record_and_display() {
        let mut stats = ArchiveStats::default();
        stats.record(EntryKind::Directory, 0);
        stats.record(EntryKind::Regular, 2);
        stats.record(EntryKind::Regular, 5);
        stats.record(EntryKind::Other(EntryType::Symlink), 0);
        assert_eq!(
            stats,
            ArchiveStats {
                directories: 1,
                files: 2,
                other: 1,
                bytes: 7
            }
        );
        assert_eq!(
            stats.to_string(),
            "1 directories, 2 files (7 bytes), 1 other entries"
        );
    }
}
