//! Run command implementation
//!
//! Verification followed by benchmarking, the harness's default action.

use tracing::warn;

use super::{bench, verify};
use crate::config::HarnessConfig;
use crate::registry::Registry;
use crate::{CliError, Result};

/// Run the full harness
///
/// Benchmarks still run after a failed verification; the verification
/// error is returned once the result file is written.
pub fn run(registry: &Registry, config: &HarnessConfig, generator: Option<&str>) -> Result<()> {
    let failed = match verify::run(registry, config, generator) {
        Ok(()) => None,
        Err(CliError::VerificationFailed(names)) => {
            warn!(failed = ?names, "Continuing to benchmarks after failed verification");
            Some(names)
        }
        Err(err) => return Err(err),
    };

    println!();
    bench::run(registry, config, generator)?;

    match failed {
        Some(names) => Err(CliError::VerificationFailed(names)),
        None => Ok(()),
    }
}
