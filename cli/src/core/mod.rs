//! # tarpipe Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the infrastructure shared by every command:
//! - `config`: Validation of command-line flags into a `RunConfig`
//! - `error`: Error types and the crate-wide `Result` alias
//!
//! ```rust
//! use crate::core::config::{Mode, RunConfig};
//! use crate::core::error::{Result, TarError};
//! ```
//!
pub mod config;
pub mod error;
