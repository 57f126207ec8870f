//! # normaldist_cli
//!
//! Verification and benchmark harness for the normal generators of
//! `normaldist_core`.
//!
//! The harness consumes generators through a single shape: fill a
//! caller-owned buffer from a seed. Generators are collected in an explicit
//! [`registry::Registry`] built at start-up.
//!
//! # Commands
//!
//! - `normaldist verify` - Check mean, SD, skewness and kurtosis
//! - `normaldist bench` - Time each generator and write the result file
//! - `normaldist list` - Print registered generator names
//! - `normaldist run` - Verify, then benchmark (default)

pub mod commands;
pub mod config;
pub mod error;
pub mod registry;
pub mod stats;

pub use error::{CliError, Result};

/// Harness version string
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
