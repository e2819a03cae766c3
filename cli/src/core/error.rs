//! # tarpipe Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types used throughout tarpipe. Every failure
//! ends the same way (a single message on stderr and exit status 1), but the
//! named variants keep the messages consistent and let tests and callers
//! match on the failure class.
//!
//! ## Architecture
//!
//! The error system consists of two components:
//! - `TarError`: A custom error enum using `thiserror` for the domain failures
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible propagation
//!
//! The error classes are:
//! - Usage errors (bad flag combination, wrong argument count, TTY misuse)
//! - Precondition errors (missing source path)
//! - Streaming errors (I/O failures, malformed archives, short file bodies)
//!
//! ## Examples
//!
//! ```rust
//! // Return a specific error type
//! return Err(TarError::Usage("too many arguments".into()).into());
//!
//! // Add context to I/O errors using anyhow
//! let file = File::open(&path)
//!     .with_context(|| format!("Failed to open {}", path.display()))?;
//! ```
//!
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Custom error type for the tarpipe application.
#[derive(Error, Debug)]
pub enum TarError {
    #[error("Usage error: {0}")]
    Usage(String),

    #[error("Refusing to use a terminal as {stream}: {hint}")]
    TerminalStream {
        stream: &'static str,
        hint: &'static str,
    },

    #[error("Unable to tar '{}'", .path.display())]
    SourceNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(
        "File '{}' changed while being archived: header records {expected} bytes but only {actual} were read",
        .path.display()
    )]
    BodySizeMismatch {
        path: PathBuf,
        expected: u64,
        actual: u64,
    },

    #[error("Cannot archive '{}': {kind} files are not supported by tar", .path.display())]
    UnsupportedFileType { path: PathBuf, kind: &'static str },

    #[error("Archive entry '{}' points outside the destination", .0.display())]
    UnsafeEntryName(PathBuf),
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;
