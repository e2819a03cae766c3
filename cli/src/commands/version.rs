//! # tarpipe Version Banner
//!
//! File: cli/src/commands/version.rs
//!
//! Handles `tarpipe -v`.
//!
use crate::core::error::Result;

/// Name line of the version banner.
pub const BANNER_NAME: &str = "Simple TAR archiver";

/// Returns the two-line name/version banner.
pub fn banner() -> String {
    format!("{}\nversion: {}", BANNER_NAME, env!("CARGO_PKG_VERSION"))
}

/// Prints the banner to stdout.
pub fn handle_version() -> Result<()> {
    println!("{}", banner());
    Ok(())
}
