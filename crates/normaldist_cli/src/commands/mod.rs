//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod bench;
pub mod list;
pub mod run;
pub mod verify;

/// Type label written to result files for single-precision generators.
pub const RESULT_TYPE: &str = "normaldistf";
