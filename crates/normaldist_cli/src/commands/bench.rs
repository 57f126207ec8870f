//! Bench command implementation
//!
//! Times each generator over repeated fills and writes the fastest trial,
//! in nanoseconds per sample, to the result file.

use normaldist_core::AlignedBuffer;
use serde::Serialize;
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{debug, info};

use super::RESULT_TYPE;
use crate::config::HarnessConfig;
use crate::registry::{GeneratorEntry, Registry};
use crate::Result;

/// One row of the result file.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BenchRecord {
    /// Generator family label.
    #[serde(rename = "Type")]
    pub kind: &'static str,
    /// Generator name.
    #[serde(rename = "Function")]
    pub function: String,
    /// Fastest trial in nanoseconds per sample.
    #[serde(rename = "Time(ns)")]
    pub time_ns: f64,
}

/// Times `entry` on `buffer`: one warm-up fill, then `trials` timed fills.
///
/// Returns the fastest trial in nanoseconds per sample.
pub fn bench_entry(
    entry: &GeneratorEntry,
    buffer: &mut [f32],
    trials: usize,
    seed: u32,
) -> Result<f64> {
    (entry.fill)(buffer, seed)?;

    let mut fastest = Duration::MAX;
    for trial in 0..trials {
        let start = Instant::now();
        (entry.fill)(buffer, seed)?;
        let elapsed = start.elapsed();

        debug!(generator = entry.name, trial, ?elapsed, "trial complete");
        fastest = fastest.min(elapsed);
    }

    Ok(fastest.as_secs_f64() * 1e9 / buffer.len() as f64)
}

/// Writes records with a `Type,Function,Time(ns)` header.
pub fn write_results(path: &Path, records: &[BenchRecord]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

/// Run the bench command
pub fn run(
    registry: &Registry,
    config: &HarnessConfig,
    generator: Option<&str>,
) -> Result<Vec<BenchRecord>> {
    let entries = registry.select(generator)?;
    info!(count = config.count, trials = config.trials, "Starting benchmarks");

    let mut buffer = AlignedBuffer::new(config.count)?;
    let mut records = Vec::with_capacity(entries.len());

    println!("{}", RESULT_TYPE);
    for entry in entries {
        let time_ns = bench_entry(entry, &mut buffer, config.trials, config.seed)?;
        println!("Benchmarking     {:<20} ... {:8.3}ns", entry.name, time_ns);

        records.push(BenchRecord {
            kind: RESULT_TYPE,
            function: entry.name.to_string(),
            time_ns,
        });
    }

    write_results(&config.result_file, &records)?;
    info!(path = %config.result_file.display(), "Results written");

    Ok(records)
}
