//! normaldist - Normal generator verification and benchmarks
//!
//! # Commands
//!
//! - `normaldist verify` - Check distribution moments of each generator
//! - `normaldist bench` - Benchmark each generator and write a CSV result file
//! - `normaldist list` - List registered generators
//! - `normaldist run` - Verify, then benchmark (default when no command is given)

use clap::{Parser, Subcommand};
use normaldist_cli::commands;
use normaldist_cli::config::{build_config, CliArgs};
use normaldist_cli::registry::Registry;
use normaldist_cli::Result;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Standard normal generator verification and benchmark harness
#[derive(Parser, Debug)]
#[command(name = "normaldist")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file path (TOML format)
    #[arg(short, long, global = true, value_name = "FILE", default_value = "normaldist.toml")]
    config: PathBuf,

    /// Samples per fill (multiple of 8)
    #[arg(short = 'n', long, global = true)]
    count: Option<usize>,

    /// Timed trials per generator
    #[arg(short, long, global = true)]
    trials: Option<usize>,

    /// Seed for seeded generators
    #[arg(short, long, global = true)]
    seed: Option<u32>,

    /// Benchmark result file (CSV)
    #[arg(short, long, global = true, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Moment tolerance for verification
    #[arg(long, global = true)]
    tolerance: Option<f64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check mean, SD, skewness and kurtosis of each generator
    Verify {
        /// Only this generator
        #[arg(short, long)]
        generator: Option<String>,
    },

    /// Time each generator and write the result file
    Bench {
        /// Only this generator
        #[arg(short, long)]
        generator: Option<String>,
    },

    /// List registered generators
    List,

    /// Verify, then benchmark
    Run {
        /// Only this generator
        #[arg(short, long)]
        generator: Option<String>,
    },
}

impl From<&Cli> for CliArgs {
    fn from(cli: &Cli) -> Self {
        CliArgs {
            config_file: Some(cli.config.clone()),
            count: cli.count,
            trials: cli.trials,
            seed: cli.seed,
            result_file: cli.output.clone(),
            log_level: cli.log_level.clone(),
            tolerance: cli.tolerance,
        }
    }
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = build_config(&CliArgs::from(&cli))?;

    init_tracing(config.log_level.as_filter_str());

    tracing::info!(
        version = normaldist_cli::VERSION,
        count = config.count,
        trials = config.trials,
        seed = config.seed,
        result_file = %config.result_file.display(),
        "Configuration loaded"
    );

    let registry = Registry::with_defaults();

    match cli.command.unwrap_or(Commands::Run { generator: None }) {
        Commands::Verify { generator } => {
            commands::verify::run(&registry, &config, generator.as_deref())
        }
        Commands::Bench { generator } => {
            commands::bench::run(&registry, &config, generator.as_deref()).map(|_| ())
        }
        Commands::List => {
            commands::list::run(&registry);
            Ok(())
        }
        Commands::Run { generator } => {
            commands::run::run(&registry, &config, generator.as_deref())
        }
    }
}
