//! # tarpipe System Utilities Module (`common::system`)
//!
//! File: cli/src/common/system/mod.rs
//!
//! ## Overview
//!
//! Checks against the process environment. Currently this is the terminal
//! guard: archive data is binary, so create mode refuses to write it to an
//! interactive stdout, and extract mode refuses to block on an interactive
//! stdin waiting for typed tar data.
//!
//! ```rust
//! use crate::common::system;
//!
//! system::ensure_not_terminal(&io::stdout(), "stdout", "redirect the archive to a file or pipe")?;
//! ```
//!
use crate::core::error::{Result, TarError};
use std::io::IsTerminal;
use tracing::debug;

/// # Terminal Guard (`ensure_not_terminal`)
///
/// Fails with `TarError::TerminalStream` if `stream` is an interactive terminal.
///
/// ## Arguments
///
/// * `stream` - The stdin or stdout handle to check.
/// * `name` - The stream name used in the error message.
/// * `hint` - What the user should do instead.
pub fn ensure_not_terminal<S: IsTerminal>(
    stream: &S,
    name: &'static str,
    hint: &'static str,
) -> Result<()> {
    if stream.is_terminal() {
        return Err(TarError::TerminalStream { stream: name, hint }.into());
    }
    debug!("{} is not a terminal", name);
    Ok(())
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempfile;

    #[test]
    fn test_regular_file_is_not_a_terminal() -> Result<()> {
        let file = tempfile()?;
        ensure_not_terminal(&file, "stdout", "redirect it")?;
        Ok(())
    }

    #[test]
    fn test_terminal_error_message() {
        let err = TarError::TerminalStream {
            stream: "stdin",
            hint: "pipe tar data into tarpipe -x",
        };
        assert_eq!(
            err.to_string(),
            "Refusing to use a terminal as stdin: pipe tar data into tarpipe -x"
        );
    }
}
