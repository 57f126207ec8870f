//! Harness configuration management
//!
//! Handles loading configuration from a TOML file and command-line
//! overrides.
//!
//! Priority (highest to lowest):
//! 1. CLI arguments
//! 2. Config file (when present)
//! 3. Default values

use normaldist_core::{BLOCK_LEN, DEFAULT_SEED};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Sample count is zero or not a whole number of blocks.
    #[error("Invalid sample count: {0}. Must be a positive multiple of 8")]
    InvalidCount(usize),

    /// Trial count is zero.
    #[error("Invalid trial count: {0}. Must be at least 1")]
    InvalidTrials(usize),

    /// Tolerance is not a positive finite number.
    #[error("Invalid tolerance: {0}. Must be positive")]
    InvalidTolerance(f64),

    /// Log level string not recognised.
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    /// Config file could not be read or parsed.
    #[error("Configuration file error: {0}")]
    FileError(String),
}

/// Log levels supported by the harness
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Most verbose; includes per-generator initialisation.
    Trace,
    /// Fill calls and timings.
    Debug,
    /// Progress messages.
    #[default]
    Info,
    /// Warnings only.
    Warn,
    /// Errors only.
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// Harness configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct HarnessConfig {
    /// Samples per fill (verification and each timed trial)
    pub count: usize,
    /// Timed trials per generator; the fastest is reported
    pub trials: usize,
    /// Seed for seeded generators
    pub seed: u32,
    /// Benchmark result file (CSV)
    pub result_file: PathBuf,
    /// Log level
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
    /// Bound applied to |mean|, |SD - 1|, |skewness| and |excess kurtosis|
    pub tolerance: f64,
}

fn deserialize_log_level<'de, D>(deserializer: D) -> Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            count: 1_000_000,
            trials: 10,
            seed: DEFAULT_SEED,
            result_file: PathBuf::from("normaldist_results.csv"),
            log_level: LogLevel::Info,
            tolerance: 0.01,
        }
    }
}

impl HarnessConfig {
    /// Create a new HarnessConfig with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;

        let config: HarnessConfig = toml::from_str(&content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.count == 0 || self.count % BLOCK_LEN != 0 {
            return Err(ConfigError::InvalidCount(self.count));
        }

        if self.trials == 0 {
            return Err(ConfigError::InvalidTrials(self.trials));
        }

        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            return Err(ConfigError::InvalidTolerance(self.tolerance));
        }

        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) -> Result<(), ConfigError> {
        if let Some(count) = cli.count {
            self.count = count;
        }
        if let Some(trials) = cli.trials {
            self.trials = trials;
        }
        if let Some(seed) = cli.seed {
            self.seed = seed;
        }
        if let Some(result_file) = &cli.result_file {
            self.result_file = result_file.clone();
        }
        if let Some(log_level) = &cli.log_level {
            self.log_level = LogLevel::from_str(log_level)?;
        }
        if let Some(tolerance) = cli.tolerance {
            self.tolerance = tolerance;
        }
        Ok(())
    }
}

/// CLI arguments structure
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Sample count override
    pub count: Option<usize>,
    /// Trial count override
    pub trials: Option<usize>,
    /// Seed override
    pub seed: Option<u32>,
    /// Result file override
    pub result_file: Option<PathBuf>,
    /// Log level override
    pub log_level: Option<String>,
    /// Tolerance override
    pub tolerance: Option<f64>,
}

/// Build configuration from all sources
///
/// A config path that does not exist falls back to defaults, so the
/// harness runs out of the box.
pub fn build_config(cli: &CliArgs) -> Result<HarnessConfig, ConfigError> {
    let mut config = match &cli.config_file {
        Some(path) if path.exists() => HarnessConfig::from_file(path)?,
        _ => HarnessConfig::default(),
    };

    config.merge_with_cli(cli)?;
    config.validate()?;

    Ok(config)
}
