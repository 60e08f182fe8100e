//! Rent Split - command-line binary
//!
//! Splits a shared house's monthly rent and its utility bills among the
//! people living there.
//!
//! # Usage
//!
//! ```bash
//! # Calculate March's rent
//! rent-split rent sheets/2024-03-01.json
//!
//! # Split bills over the monthly sheets in ./sheets
//! rent-split bills bills.json --sheets-dir sheets
//!
//! # Start next month's sheet
//! rent-split new-rent --out sheets/
//! ```
//!
//! # Environment Variables
//!
//! * `RENT_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)
//! * `RENT_TIMEZONE` - IANA timezone the sheets are written in (default: UTC)
//! * `RENT_SHEETS_DIR` - Directory of `YYYY-MM-01.json` rent sheets (default: .)
//! * `RENT_FORMAT` - Report format: text or json (default: text)

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use core_kernel::Timezone;
use interface_cli::{commands, CliConfig, OutputFormat};

#[derive(Parser)]
#[command(name = "rent-split")]
#[command(about = "Split shared-house rent and bills by the day")]
struct Cli {
    /// Report format
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,

    /// Log level or filter directive
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// IANA timezone the sheets are written in
    #[arg(long, global = true)]
    timezone: Option<Timezone>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate one month's rent from a rent sheet
    Rent {
        /// Rent sheet (JSON)
        file: PathBuf,
    },
    /// Split every bill in a bills document
    Bills {
        /// Bills document (JSON)
        file: PathBuf,

        /// Directory of monthly rent sheets
        #[arg(long)]
        sheets_dir: Option<PathBuf>,
    },
    /// Write a rent sheet for next month
    NewRent {
        /// File or directory to write to instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Write an empty bills document
    NewBills {
        /// File to write to instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

/// Initializes the tracing subscriber; logs go to stderr so stdout carries
/// only the report
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Loads configuration from the environment and applies flag overrides
fn load_config(cli: &Cli) -> anyhow::Result<CliConfig> {
    let mut config = CliConfig::from_env().context("Failed to load RENT_ configuration")?;

    if let Some(format) = cli.format {
        config.format = format;
    }
    if let Some(level) = &cli.log_level {
        config.log_level = level.clone();
    }
    if let Some(timezone) = cli.timezone {
        config.timezone = timezone;
    }
    if let Commands::Bills { sheets_dir: Some(dir), .. } = &cli.command {
        config.sheets_dir = dir.clone();
    }

    Ok(config)
}

fn write_output(out: Option<&Path>, text: &str) -> anyhow::Result<()> {
    match out {
        Some(path) => {
            fs::write(path, format!("{}\n", text))
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!("Wrote {}", path.display());
        }
        None => println!("{}", text),
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    init_tracing(&config.log_level);

    tracing::debug!(timezone = %config.timezone, format = ?config.format, "Configuration loaded");

    match &cli.command {
        Commands::Rent { file } => {
            let report = commands::rent(file, &config)?;
            println!("{}", report.trim_end());
        }
        Commands::Bills { file, .. } => {
            let report = commands::bills(file, &config)?;
            println!("{}", report.trim_end());
        }
        Commands::NewRent { out } => {
            let (name, sheet) = commands::new_rent(&config)?;
            // A directory gets the conventional sheet name
            let target = out.as_ref().map(|path| {
                if path.is_dir() {
                    path.join(&name)
                } else {
                    path.clone()
                }
            });
            write_output(target.as_deref(), &sheet)?;
        }
        Commands::NewBills { out } => {
            let document = commands::new_bills(&config)?;
            write_output(out.as_deref(), &document)?;
        }
    }

    Ok(())
}
