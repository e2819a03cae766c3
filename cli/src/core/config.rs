//! # tarpipe Run Configuration
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module turns the parsed command-line flags into a validated
//! `RunConfig`. The configuration is built once at startup and passed into the
//! command handlers; nothing else in the program reads process-wide state.
//!
//! ## Architecture
//!
//! - `Cli` (defined in `main.rs`) holds the raw `clap` parse result
//! - `RunConfig::from_parts` applies the mode rules:
//!   1. `-v` wins over everything else
//!   2. exactly one of `-c` / `-x`
//!   3. create takes exactly one path, extract takes zero or one (default `.`)
//! - Violations are reported as `TarError::Usage`
//!
//! ## Examples
//!
//! ```rust
//! let cfg = RunConfig::from_parts(true, false, false, vec!["src".into()])?;
//! assert_eq!(cfg.mode, Mode::Create { source: "src".into() });
//! ```
//!
use crate::core::error::{Result, TarError};
use std::path::PathBuf;
use tracing::debug;

/// Destination used by extract mode when no directory argument is given.
pub const DEFAULT_DESTINATION: &str = ".";

/// The operation selected for this invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Archive `source` to stdout.
    Create { source: PathBuf },
    /// Unpack stdin under `destination`.
    Extract { destination: PathBuf },
    /// Print the name/version banner.
    Version,
}

/// # Run Configuration (`RunConfig`)
///
/// The validated, immutable settings for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub mode: Mode,
}

impl RunConfig {
    /// # Build From Flags (`from_parts`)
    ///
    /// Validates the raw flag values and positional arguments.
    ///
    /// ## Arguments
    ///
    /// * `create` - Whether `-c` was given.
    /// * `extract` - Whether `-x` was given.
    /// * `version` - Whether `-v` was given. Wins over everything else.
    /// * `paths` - The positional arguments, in order.
    ///
    /// ## Returns
    ///
    /// * `Result<RunConfig>` - The selected mode with its path.
    ///
    /// ## Errors
    ///
    /// Returns `TarError::Usage` if both or neither of `create`/`extract` are set,
    /// if create mode does not receive exactly one path, or if extract mode
    /// receives more than one.
    pub fn from_parts(
        create: bool,
        extract: bool,
        version: bool,
        mut paths: Vec<PathBuf>,
    ) -> Result<Self> {
        if version {
            return Ok(RunConfig {
                mode: Mode::Version,
            });
        }

        let mode = match (create, extract) {
            (true, false) => {
                if paths.len() != 1 {
                    return Err(TarError::Usage(
                        "when creating a tar, specify just one directory as argument".into(),
                    )
                    .into());
                }
                Mode::Create {
                    source: paths.remove(0),
                }
            }
            (false, true) => {
                let destination = match paths.len() {
                    0 => PathBuf::from(DEFAULT_DESTINATION),
                    1 => paths.remove(0),
                    _ => return Err(TarError::Usage("too many arguments".into()).into()),
                };
                Mode::Extract { destination }
            }
            _ => {
                return Err(TarError::Usage(
                    "one and only one of create (-c) or extract (-x) mode is required".into(),
                )
                .into())
            }
        };

        debug!("Resolved run mode: {:?}", mode);
        Ok(RunConfig { mode })
    }
}
