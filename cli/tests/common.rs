//! # tarpipe CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration tests in `cli/tests/`. Each test file
//! declares `mod common;` and drives the compiled `tarpipe` binary through
//! `assert_cmd`.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

/// # Get tarpipe Command (`tarpipe_cmd`)
///
/// Creates an `assert_cmd::Command` for the compiled `tarpipe` binary.
///
/// ## Panics
/// Panics if the binary cannot be found via `Command::cargo_bin`.
pub fn tarpipe_cmd() -> Command {
    Command::cargo_bin("tarpipe").expect("Failed to find tarpipe binary for testing")
}

/// Creates `<root>/a/f.txt` containing `hi`.
pub fn write_sample_tree(root: &Path) {
    fs::create_dir_all(root.join("a")).expect("create sample dir");
    fs::write(root.join("a/f.txt"), "hi").expect("write sample file");
}

/// Lists `(name, entry type, body)` for every entry in a tar stream.
pub fn list_entries(data: &[u8]) -> Vec<(PathBuf, tar::EntryType, Vec<u8>)> {
    let mut archive = tar::Archive::new(data);
    archive
        .entries()
        .expect("readable archive")
        .map(|entry| {
            let mut entry = entry.expect("readable entry");
            let name = entry.path().expect("valid name").into_owned();
            let entry_type = entry.header().entry_type();
            let mut body = Vec::new();
            entry.read_to_end(&mut body).expect("readable body");
            (name, entry_type, body)
        })
        .collect()
}
