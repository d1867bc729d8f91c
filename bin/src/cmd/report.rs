//! Report command implementation.

use crate::cmd::trend::print_trend;
use crate::cmd::ttm::print_ttm;
use crate::cmd::{print_header, print_json};
use crate::{OutputFormat, data};
use anyhow::Result;
use ronda::analyze_companies;
use std::path::Path;
use tracing::info;

/// Analyze every company in a file and print the reports.
pub(crate) async fn show_report(
    file: &Path,
    config: Option<&Path>,
    windows: usize,
    format: OutputFormat,
) -> Result<()> {
    let companies = data::load_companies(file).await?;
    let config = data::load_config(config).await?;
    info!(companies = companies.len(), "loaded companies");

    // CPU-bound batch work runs off the async runtime
    let reports =
        tokio::task::spawn_blocking(move || analyze_companies(&companies, &config, windows)).await?;

    match format {
        OutputFormat::Json => print_json(&reports)?,
        OutputFormat::Text => {
            for report in &reports {
                print_header(&format!("Company Report: {}", report.symbol));
                print_trend(&report.trend);
                print_ttm(&report.ttm);
            }
            if reports.len() > 1 {
                println!("{:<10} {:>10} {:>10} {:>12}", "Symbol", "Direction", "Score", "TTM revenue");
                println!("{}", "─".repeat(45));
                for report in &reports {
                    println!(
                        "{:<10} {:>10} {:>10.1} {:>12.2}",
                        report.symbol,
                        report.trend.trend_direction.to_string(),
                        report.trend.trend_score,
                        report.ttm.metrics.revenue
                    );
                }
                println!();
            }
        }
    }

    Ok(())
}
