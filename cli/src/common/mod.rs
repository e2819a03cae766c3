//! # tarpipe Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//!
//! ## Overview
//!
//! Shared building blocks used by the command handlers in `commands::`:
//!
//! - **`archive`**: The archive writer and reader, plus the entry types they share.
//! - **`fs`**: Filesystem helpers for creating directories and files during extraction.
//! - **`system`**: Process environment checks (terminal detection).
//!
//! ```rust
//! use crate::common::{archive, system};
//!
//! system::ensure_not_terminal(&io::stdout(), "stdout", "redirect the archive")?;
//! let stats = archive::create::create_archive(io::stdout().lock(), Path::new("src"))?;
//! ```
//!

/// Tar archive creation and extraction.
pub mod archive;
/// Filesystem operations used while extracting.
pub mod fs;
/// Process environment checks.
pub mod system;
