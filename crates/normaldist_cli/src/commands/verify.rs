//! Verify command implementation
//!
//! Fills one buffer per generator and checks its moments against the
//! standard normal distribution.

use normaldist_core::AlignedBuffer;
use tracing::{debug, info};

use super::RESULT_TYPE;
use crate::config::{ConfigError, HarnessConfig};
use crate::registry::{GeneratorEntry, Registry};
use crate::stats::MomentReport;
use crate::{CliError, Result};

/// Fills `count` samples from `entry` and computes its report.
pub fn verify_entry(entry: &GeneratorEntry, config: &HarnessConfig) -> Result<MomentReport> {
    let mut buffer = AlignedBuffer::new(config.count)?;
    (entry.fill)(&mut buffer, config.seed)?;

    debug!(generator = entry.name, count = config.count, "buffer filled");

    MomentReport::new(&buffer, config.tolerance)
        .ok_or_else(|| ConfigError::InvalidCount(config.count).into())
}

/// Run the verify command
///
/// The `null` generator is skipped. Every selected generator is reported
/// before the outcome is returned.
pub fn run(registry: &Registry, config: &HarnessConfig, generator: Option<&str>) -> Result<()> {
    let entries = registry.select(generator)?;
    info!(count = config.count, tolerance = config.tolerance, "Starting verification");

    let mut failed = Vec::new();
    for entry in entries.into_iter().filter(|e| !e.is_null()) {
        let report = verify_entry(entry, config)?;

        println!(
            "Verifying {} {} ... {}",
            RESULT_TYPE,
            entry.name,
            if report.passed() { "OK" } else { "Fail" }
        );
        println!("{}\n", report);

        if !report.passed() {
            failed.push(entry.name.to_string());
        }
    }

    if failed.is_empty() {
        info!("Verification complete");
        Ok(())
    } else {
        Err(CliError::VerificationFailed(failed))
    }
}
