//! Ronda CLI binary.
//!
//! Provides a command-line interface for the Ronda trend and TTM engine.

mod cmd;
mod data;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ronda")]
#[command(about = "Historical trend and TTM analysis of company fundamentals", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze historical trends of a company
    Trend {
        /// Company financials JSON file
        file: PathBuf,

        /// Trend configuration JSON file (falls back to RONDA_CONFIG)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Compute trailing-twelve-month metrics of a company
    Ttm {
        /// Company financials JSON file
        file: PathBuf,

        /// Number of rolling TTM windows
        #[arg(short, long, default_value = "4")]
        windows: usize,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Full trend and TTM report for one company or an array of companies
    Report {
        /// Company financials JSON file
        file: PathBuf,

        /// Trend configuration JSON file (falls back to RONDA_CONFIG)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Number of rolling TTM windows
        #[arg(short, long, default_value = "4")]
        windows: usize,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Compound annual growth rate between two values
    Cagr {
        /// Ending value
        #[arg(allow_negative_numbers = true)]
        end: f64,

        /// Starting value
        #[arg(allow_negative_numbers = true)]
        start: f64,

        /// Number of years
        #[arg(allow_negative_numbers = true)]
        years: f64,
    },
}

/// Output format for analysis results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Human-readable tables
    Text,
    /// Pretty-printed JSON
    Json,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Trend { file, config, format } => {
            cmd::trend::show_trend(&file, config.as_deref(), format).await?;
        }
        Commands::Ttm { file, windows, format } => {
            cmd::ttm::show_ttm(&file, windows, format).await?;
        }
        Commands::Report {
            file,
            config,
            windows,
            format,
        } => {
            cmd::report::show_report(&file, config.as_deref(), windows, format).await?;
        }
        Commands::Cagr { end, start, years } => {
            cmd::cagr::show_cagr(end, start, years);
        }
    }

    Ok(())
}
