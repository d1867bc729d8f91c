//! TTM command implementation.

use crate::cmd::{print_header, print_json, print_section};
use crate::{OutputFormat, data};
use anyhow::Result;
use ronda_ttm::{TtmCalculationResult, calculate_ttm};
use std::path::Path;

/// Compute and print TTM figures for one company.
pub(crate) async fn show_ttm(file: &Path, windows: usize, format: OutputFormat) -> Result<()> {
    let company = data::load_company(file).await?;
    let result = calculate_ttm(&company.statements, windows);

    match format {
        OutputFormat::Json => print_json(&result)?,
        OutputFormat::Text => {
            print_header("Trailing Twelve Months");
            println!("Symbol:   {}", company.symbol);
            println!("Quarters: {}", result.quarters_available);
            println!();
            print_ttm(&result);
        }
    }

    Ok(())
}

/// Print a TTM calculation as text.
pub(crate) fn print_ttm(result: &TtmCalculationResult) {
    if result.quarters_available < ronda_ttm::TTM_QUARTERS {
        println!(
            "Only {} quarter(s) available; figures cover a partial year.\n",
            result.quarters_available
        );
    }

    let m = &result.metrics;
    print_section("TTM METRICS");
    for (label, value) in [
        ("Revenue", m.revenue),
        ("Gross profit", m.gross_profit),
        ("Operating profit", m.operating_profit),
        ("EBITDA", m.ebitda),
        ("Net profit", m.net_profit),
        ("Operating cash flow", m.operating_cash_flow),
        ("Capex", m.capex),
        ("Free cash flow", m.free_cash_flow),
    ] {
        println!("{:<24} {:>16.2}", label, value);
    }
    println!();

    let mg = &result.margins;
    print_section("MARGINS");
    for (label, value) in [
        ("Gross", mg.gross_margin),
        ("Operating", mg.operating_margin),
        ("EBITDA", mg.ebitda_margin),
        ("Net", mg.net_margin),
        ("Operating cash flow", mg.ocf_margin),
        ("Free cash flow", mg.fcf_margin),
    ] {
        println!("{:<24} {:>15.2}%", label, value);
    }
    println!();

    let r = &result.ratios;
    print_section("RATIOS");
    println!("{:<24} {:>15.2}%", "ROE", r.roe);
    println!("{:<24} {:>15.2}%", "ROA", r.roa);
    println!("{:<24} {:>16.2}", "Asset turnover", r.asset_turnover);
    println!("{:<24} {:>16.2}", "Debt to equity", r.debt_to_equity);
    println!("{:<24} {:>16.2}", "Interest coverage", r.interest_coverage);
    println!("{:<24} {:>15.2}%", "Cash conversion", r.cash_conversion);
    println!("{:<24} {:>15.2}%", "Capex to revenue", r.capex_to_revenue);
    println!("{:<24} {:>16.2}", "Working capital turnover", r.working_capital_turnover);
    println!();

    print_section("GROWTH (vs prior TTM)");
    match &result.growth {
        Some(g) => {
            println!("{:<24} {:>+15.2}%", "Revenue", g.revenue_growth);
            println!("{:<24} {:>+15.2}%", "Operating profit", g.operating_profit_growth);
            println!("{:<24} {:>+15.2}%", "Net profit", g.net_profit_growth);
            println!("{:<24} {:>+15.2}%", "Operating cash flow", g.ocf_growth);
            println!("{:<24} {:>+15.2}%", "Total assets", g.asset_growth);
        }
        None => println!("Growth requires at least 8 quarters."),
    }
    println!();

    if !result.series.is_empty() {
        print_section("ROLLING TTM");
        println!("{:<12} {:>14} {:>14} {:>10} {:>10}", "Period", "Revenue", "Net profit", "Net %", "Rev gr %");
        println!("{}", "─".repeat(64));
        for snapshot in &result.series {
            let growth = snapshot
                .growth
                .map(|g| format!("{:+.2}", g.revenue_growth))
                .unwrap_or_else(|| "-".to_string());
            println!(
                "{:<12} {:>14.2} {:>14.2} {:>10.2} {:>10}",
                snapshot.period,
                snapshot.metrics.revenue,
                snapshot.metrics.net_profit,
                snapshot.margins.net_margin,
                growth
            );
        }
        println!();
    }
}
