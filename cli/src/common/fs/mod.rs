//! # tarpipe Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//!
//! ## Overview
//!
//! Filesystem helpers shared by the archive code. Users import from the
//! submodule, e.g. `use crate::common::fs::io::ensure_dir_exists;`.
//!

/// Directory creation and file opening with extraction permissions.
pub mod io;
