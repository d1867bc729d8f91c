//! Trend command implementation.

use crate::cmd::{pct, print_header, print_json, print_section};
use crate::{OutputFormat, data};
use anyhow::Result;
use ronda::quarterly_series;
use ronda_trend::{HistoricalTrendAnalyzer, TrendAnalysisResult};
use std::path::Path;

/// Analyze and print the historical trends of one company.
pub(crate) async fn show_trend(file: &Path, config: Option<&Path>, format: OutputFormat) -> Result<()> {
    let company = data::load_company(file).await?;
    let analyzer = HistoricalTrendAnalyzer::new(data::load_config(config).await?);

    let quarterly = quarterly_series(&company);
    let result = analyzer.analyze(&company.annual, &quarterly);

    match format {
        OutputFormat::Json => print_json(&result)?,
        OutputFormat::Text => {
            print_header("Historical Trend Analysis");
            println!("Symbol:    {}", company.symbol);
            println!("Annual:    {} periods", company.annual.len());
            println!("Quarterly: {} periods", quarterly.len());
            println!();
            print_trend(&result);
        }
    }

    Ok(())
}

/// Print a trend analysis as text.
pub(crate) fn print_trend(result: &TrendAnalysisResult) {
    print_section("GROWTH");
    println!("{:<24} {:>12}", "Horizon", "CAGR");
    println!("{}", "─".repeat(37));
    for (label, value) in [
        ("1 year", result.cagr_1y),
        ("3 years", result.cagr_3y),
        ("5 years", result.cagr_5y),
        ("10 years", result.cagr_10y),
    ] {
        println!("{:<24} {:>12}", label, pct(value));
    }
    println!();

    print_section("TREND");
    println!("Direction:         {}", result.trend_direction);
    println!("Strength:          {}", result.trend_strength);
    println!("Confidence:        {:.2}", result.confidence);
    println!("Consistency:       {:.2}", result.consistency);
    println!("Magnitude:         {:.2}", result.magnitude);
    println!("Acceleration:      {}", pct(result.acceleration));
    println!("Annual volatility: {:.4}", result.annual_volatility);
    println!();

    print_section("SEASONALITY");
    println!("Seasonality score: {:.3}", result.seasonality);
    println!("QoQ volatility:    {:.4}", result.volatility);
    if let Some(adjustment) = &result.seasonal_adjustment {
        println!();
        println!("{:<8} {:>14} {:>10}", "Quarter", "Average", "Index");
        println!("{}", "─".repeat(34));
        for (quarter, index) in adjustment.indices.iter() {
            println!(
                "{:<8} {:>14.2} {:>10.3}",
                quarter.as_str(),
                result.quarterly_pattern.quarter_averages[quarter],
                index
            );
        }
    }
    println!();

    print_section("SCORE");
    println!("Data completeness: {:.0}%", result.data_completeness * 100.0);
    println!("Trend score:       {:.1} / 100", result.trend_score);
    println!();
}
