//! Per-company reports and parallel batch analysis.

use std::borrow::Cow;

use rayon::prelude::*;
use ronda_core::{CompanyFinancials, DataPoint, FinancialLine};
use ronda_trend::{HistoricalTrendAnalyzer, TrendAnalysisResult, TrendConfig};
use ronda_ttm::{TtmCalculationResult, calculate_ttm};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Trend and TTM analysis of one company.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompanyReport {
    /// Company symbol
    pub symbol: String,
    /// Historical trend analysis of the annual and quarterly series
    pub trend: TrendAnalysisResult,
    /// TTM analysis of the quarterly statements
    pub ttm: TtmCalculationResult,
}

/// Analyze one company.
///
/// When no quarterly series is supplied, quarterly revenue is taken from the
/// statements instead.
pub fn analyze_company(company: &CompanyFinancials, config: &TrendConfig, windows: usize) -> CompanyReport {
    report_with(&HistoricalTrendAnalyzer::new(config.clone()), company, windows)
}

/// Analyze many companies in parallel. Reports are in input order.
#[instrument(skip_all, fields(companies = companies.len(), windows = windows))]
pub fn analyze_companies(
    companies: &[CompanyFinancials],
    config: &TrendConfig,
    windows: usize,
) -> Vec<CompanyReport> {
    let analyzer = HistoricalTrendAnalyzer::new(config.clone());
    let reports: Vec<CompanyReport> = companies
        .par_iter()
        .map(|company| report_with(&analyzer, company, windows))
        .collect();

    debug!(reports = reports.len(), "batch analysis complete");
    reports
}

fn report_with(analyzer: &HistoricalTrendAnalyzer, company: &CompanyFinancials, windows: usize) -> CompanyReport {
    let quarterly = quarterly_series(company);
    CompanyReport {
        symbol: company.symbol.clone(),
        trend: analyzer.analyze(&company.annual, &quarterly),
        ttm: calculate_ttm(&company.statements, windows),
    }
}

/// Quarterly series used for trend analysis: the supplied quarterly series,
/// or quarterly revenue from the statements when none is supplied.
pub fn quarterly_series(company: &CompanyFinancials) -> Cow<'_, [DataPoint]> {
    if company.quarterly.is_empty() && !company.statements.is_empty() {
        debug!(symbol = %company.symbol, "deriving quarterly revenue from statements");
        Cow::Owned(FinancialLine::Revenue.extract_series(&company.statements))
    } else {
        Cow::Borrowed(&company.quarterly)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ronda_core::QuarterlyFinancialData;

    fn company(symbol: &str, growth: f64) -> CompanyFinancials {
        let mut company = CompanyFinancials::new(symbol);
        company.annual = (0..6)
            .map(|i| DataPoint::new(format!("FY{}", 2024 - i), 100.0 * (1.0 + growth).powi(5 - i)))
            .collect();
        company
    }

    #[test]
    fn test_batch_matches_single_and_keeps_order() {
        let companies: Vec<CompanyFinancials> = (0..16)
            .map(|i| company(&format!("C{:02}", i), -0.1 + 0.02 * i as f64))
            .collect();
        let config = TrendConfig::default();

        let reports = analyze_companies(&companies, &config, 4);
        assert_eq!(reports.len(), companies.len());
        for (company, report) in companies.iter().zip(&reports) {
            assert_eq!(report.symbol, company.symbol);
            assert_eq!(report, &analyze_company(company, &config, 4));
        }
    }

    #[test]
    fn test_quarterly_fallback_to_statements() {
        let mut company = company("ACME", 0.1);
        company.statements = ["Dec 2024", "Sep 2024", "Jun 2024", "Mar 2024"]
            .iter()
            .zip([130.0, 100.0, 100.0, 70.0])
            .map(|(label, revenue)| QuarterlyFinancialData {
                revenue: Some(revenue),
                ..QuarterlyFinancialData::new(*label, 0)
            })
            .collect();

        let report = analyze_company(&company, &TrendConfig::default(), 4);
        assert!(report.trend.seasonality > 0.0);
        assert!(report.trend.seasonal_adjustment.is_some());
        assert_abs_diff_eq!(report.ttm.metrics.revenue, 400.0, epsilon = 1e-9);
        assert_eq!(report.ttm.series.len(), 1);
    }

    #[test]
    fn test_empty_company() {
        let report = analyze_company(&CompanyFinancials::new("NONE"), &TrendConfig::default(), 4);
        assert_eq!(report.trend, TrendAnalysisResult::default());
        assert_eq!(report.ttm.quarters_available, 0);
    }
}
