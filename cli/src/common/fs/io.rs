//! # tarpipe Filesystem I/O Operations
//!
//! File: cli/src/common/fs/io.rs
//!
//! ## Overview
//!
//! Small wrappers around `std::fs` used by extraction. They attach path
//! context to errors and apply the permission bits the archiver needs:
//!
//! - **`ensure_dir_exists`**: creates a directory and any missing parents with
//!   mode `0755` when nothing exists at the path yet.
//! - **`open_for_extract`**: opens (creating or truncating) a file for
//!   read-write, using the given mode bits when the file is created.
//!
//! On non-Unix targets the mode bits are ignored.
//!
//! ```rust
//! use crate::common::fs::io;
//!
//! io::ensure_dir_exists(Path::new("out/a"))?;
//! let mut file = io::open_for_extract(Path::new("out/a/f.txt"), 0o644)?;
//! ```
//!
use crate::core::error::Result;
use anyhow::Context;
use std::fs::{self, File, OpenOptions};
use std::path::Path;
use tracing::{debug, warn};

/// Permission bits for every directory created during extraction.
pub const DIR_MODE: u32 = 0o755;

/// Mask applied to archived mode bits before they are used as a creation mode.
const PERMISSION_MASK: u32 = 0o7777;

/// Ensures that something exists at `path`, creating it as a directory if not.
///
/// Missing parents are created too (like `mkdir -p`), all with [`DIR_MODE`].
/// If the path already exists nothing is changed. An existing non-directory is
/// left alone with a warning; writing beneath it will fail later.
///
/// # Arguments
///
/// * `path` - The directory to create.
///
/// # Errors
///
/// Returns an `Err` if creating the directory fails (e.g., due to permissions).
pub fn ensure_dir_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        dir_builder()
            .create(path)
            .with_context(|| format!("Failed to create directory {:?}", path))?;
        debug!("Created directory: {:?}", path);
    } else if !path.is_dir() {
        warn!("Path exists but is not a directory: {:?}", path);
    } else {
        debug!("Directory already exists: {:?}", path);
    }
    Ok(())
}

/// Opens `path` for reading and writing, creating it with `mode` if it is new.
///
/// An existing file is truncated so that its contents end up exactly equal to
/// what is written next. The process umask still applies to `mode`.
///
/// # Arguments
///
/// * `path` - The file to open.
/// * `mode` - Archived mode bits; only the low 12 bits are used.
///
/// # Returns
///
/// * `Result<File>` - The open handle, positioned at the start of the file.
///
/// # Errors
///
/// Returns an `Err` if the file cannot be opened or created.
pub fn open_for_extract(path: &Path, mode: u32) -> Result<File> {
    let mut options = OpenOptions::new();
    options.read(true).write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(mode & PERMISSION_MASK);
    }
    #[cfg(not(unix))]
    let _ = mode;

    options
        .open(path)
        .with_context(|| format!("Failed to open {:?} for writing", path))
}

fn dir_builder() -> fs::DirBuilder {
    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(DIR_MODE);
    }
    builder
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Seek, SeekFrom, Write};
    use tempfile::tempdir;

    /// Creating a nested directory also creates its parents.
    #[test]
    fn test_ensure_dir_exists_creates_new() -> Result<()> {
        let base_dir = tempdir()?;
        let new_dir = base_dir.path().join("new/subdir");
        assert!(!new_dir.exists());
        ensure_dir_exists(&new_dir)?;
        assert!(new_dir.is_dir());
        Ok(())
    }

    /// An existing directory is a no-op.
    #[test]
    fn test_ensure_dir_exists_already_exists() -> Result<()> {
        let base_dir = tempdir()?;
        let existing_dir = base_dir.path().join("existing");
        fs::create_dir(&existing_dir)?;
        ensure_dir_exists(&existing_dir)?;
        assert!(existing_dir.is_dir());
        Ok(())
    }

    /// An existing file is left untouched rather than replaced.
    #[test]
    fn test_ensure_dir_exists_path_is_file() -> Result<()> {
        let base_dir = tempdir()?;
        let file_path = base_dir.path().join("a_file.txt");
        fs::write(&file_path, "hello")?;
        ensure_dir_exists(&file_path)?;
        assert_eq!(fs::read_to_string(&file_path)?, "hello");
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn test_created_dirs_use_dir_mode() -> Result<()> {
        use std::os::unix::fs::PermissionsExt;
        let base_dir = tempdir()?;
        let new_dir = base_dir.path().join("x/y");
        ensure_dir_exists(&new_dir)?;
        // umask can only remove bits
        let mode = fs::metadata(&new_dir)?.permissions().mode() & 0o777;
        assert_eq!(mode & !DIR_MODE, 0);
        Ok(())
    }

    /// Reopening an existing longer file truncates it.
    #[test]
    fn test_open_for_extract_truncates() -> Result<()> {
        let base_dir = tempdir()?;
        let path = base_dir.path().join("f.txt");
        fs::write(&path, "a much longer previous body")?;
        let mut file = open_for_extract(&path, 0o644)?;
        file.write_all(b"hi")?;
        file.seek(SeekFrom::Start(0))?;
        let mut content = String::new();
        file.read_to_string(&mut content)?;
        assert_eq!(content, "hi");
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn test_open_for_extract_applies_mode_on_create() -> Result<()> {
        use std::os::unix::fs::PermissionsExt;
        let base_dir = tempdir()?;
        let path = base_dir.path().join("ro.txt");
        drop(open_for_extract(&path, 0o100600)?);
        let mode = fs::metadata(&path)?.permissions().mode() & 0o777;
        assert_eq!(mode, 0o600);
        Ok(())
    }

    #[test]
    fn test_open_for_extract_missing_parent() -> Result<()> {
        let base_dir = tempdir()?;
        let result = open_for_extract(&base_dir.path().join("nope/f.txt"), 0o644);
        assert!(result.is_err());
        Ok(())
    }
}
