//! # tarpipe Command Handlers
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! One handler per run mode. `main.rs` validates the flags into a
//! `RunConfig` and calls exactly one of these; each handler wires a core
//! archive function to stdin or stdout.
//!

/// `-c`: archive a directory tree to stdout.
pub mod create;
/// `-x`: unpack stdin into a directory.
pub mod extract;
/// `-v`: print the name/version banner.
pub mod version;
