//! Return, turnover, leverage and coverage ratios.
//!
//! Balance-sheet averages are taken over the quarters in the TTM window that
//! report the field. Debt-to-equity and interest coverage use the latest
//! quarter's point-in-time figures.

use ronda_core::stats::{mean, safe_ratio};
use ronda_core::{FinancialLine, QuarterlyFinancialData};
use serde::{Deserialize, Serialize};

use crate::TTM_QUARTERS;
use crate::metrics::TtmMetrics;

/// Financial ratios for a TTM snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TtmRatios {
    /// Return on average equity, percent
    pub roe: f64,
    /// Return on average assets, percent
    pub roa: f64,
    /// Revenue / average assets
    pub asset_turnover: f64,
    /// Latest debt / latest equity
    pub debt_to_equity: f64,
    /// Latest operating profit / latest interest
    pub interest_coverage: f64,
    /// Operating cash flow / revenue, percent
    pub cash_conversion: f64,
    /// Capex / revenue, percent
    pub capex_to_revenue: f64,
    /// Revenue / average working capital
    pub working_capital_turnover: f64,
}

/// Ratios of the window `quarters[..4]` given its TTM sums.
pub fn ttm_ratios(quarters: &[QuarterlyFinancialData], metrics: &TtmMetrics) -> TtmRatios {
    let window = &quarters[..quarters.len().min(TTM_QUARTERS)];

    let avg_equity = window_average(window, FinancialLine::ShareholdersEquity);
    let avg_assets = window_average(window, FinancialLine::TotalAssets);
    let avg_working_capital = window_average(window, FinancialLine::WorkingCapital);

    let (debt_to_equity, interest_coverage) = match window.first() {
        Some(latest) => (
            safe_ratio(
                latest.amount(FinancialLine::TotalDebt),
                latest.amount(FinancialLine::ShareholdersEquity),
            ),
            safe_ratio(
                latest.amount(FinancialLine::OperatingProfit),
                latest.amount(FinancialLine::Interest),
            ),
        ),
        None => (0.0, 0.0),
    };

    TtmRatios {
        roe: safe_ratio(metrics.net_profit, avg_equity) * 100.0,
        roa: safe_ratio(metrics.net_profit, avg_assets) * 100.0,
        asset_turnover: safe_ratio(metrics.revenue, avg_assets),
        debt_to_equity,
        interest_coverage,
        cash_conversion: safe_ratio(metrics.operating_cash_flow, metrics.revenue) * 100.0,
        capex_to_revenue: safe_ratio(metrics.capex, metrics.revenue) * 100.0,
        working_capital_turnover: safe_ratio(metrics.revenue, avg_working_capital),
    }
}

/// Mean of a line over the quarters that report it, 0 if none do.
fn window_average(window: &[QuarterlyFinancialData], line: FinancialLine) -> f64 {
    let reported: Vec<f64> = window.iter().filter_map(|q| q.reported(line)).collect();
    mean(&reported)
}
