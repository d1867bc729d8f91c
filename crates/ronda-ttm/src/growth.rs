//! TTM growth against the prior TTM window.

use ronda_core::stats::safe_ratio;
use ronda_core::{FinancialLine, QuarterlyFinancialData};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::TTM_QUARTERS;
use crate::metrics::ttm_metrics;

/// Quarters needed for a current and a prior TTM window.
pub const GROWTH_QUARTERS: usize = 2 * TTM_QUARTERS;

/// Percent change of TTM figures against the preceding four quarters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TtmGrowth {
    /// Revenue growth, percent
    pub revenue_growth: f64,
    /// Net profit growth, percent
    pub net_profit_growth: f64,
    /// Operating profit growth, percent
    pub operating_profit_growth: f64,
    /// Operating cash flow growth, percent
    pub ocf_growth: f64,
    /// Latest total assets against the oldest quarter of the prior window, percent
    pub asset_growth: f64,
}

/// Growth of `quarters[0..4]` against `quarters[4..8]`.
///
/// Needs at least eight most-recent-first quarters; otherwise every field is
/// zero.
pub fn ttm_growth(quarters: &[QuarterlyFinancialData]) -> TtmGrowth {
    if quarters.len() < GROWTH_QUARTERS {
        trace!(available = quarters.len(), "not enough quarters for TTM growth");
        return TtmGrowth::default();
    }

    let current = ttm_metrics(&quarters[..TTM_QUARTERS]);
    let prior = ttm_metrics(&quarters[TTM_QUARTERS..GROWTH_QUARTERS]);
    let assets = |q: &QuarterlyFinancialData| q.amount(FinancialLine::TotalAssets);

    TtmGrowth {
        revenue_growth: percent_change(current.revenue, prior.revenue),
        net_profit_growth: percent_change(current.net_profit, prior.net_profit),
        operating_profit_growth: percent_change(current.operating_profit, prior.operating_profit),
        ocf_growth: percent_change(current.operating_cash_flow, prior.operating_cash_flow),
        asset_growth: percent_change(
            assets(&quarters[0]),
            assets(&quarters[GROWTH_QUARTERS - 1]),
        ),
    }
}

/// `(current - prior) / |prior| * 100`, 0 for a zero base.
pub fn percent_change(current: f64, prior: f64) -> f64 {
    safe_ratio(current - prior, prior.abs()) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn quarters(revenues: &[f64]) -> Vec<QuarterlyFinancialData> {
        revenues
            .iter()
            .enumerate()
            .map(|(i, &revenue)| QuarterlyFinancialData {
                revenue: Some(revenue),
                net_profit: Some(revenue / 10.0),
                total_assets: Some(1000.0 - 10.0 * i as f64),
                ..QuarterlyFinancialData::new(format!("Q{}", i), -(i as i64))
            })
            .collect()
    }

    #[test]
    fn test_revenue_growth() {
        // Current TTM 3223, prior 3070
        let qs = quarters(&[963.0, 830.0, 750.0, 680.0, 900.0, 800.0, 720.0, 650.0]);
        let growth = ttm_growth(&qs);

        assert_abs_diff_eq!(growth.revenue_growth, 4.98, epsilon = 0.01);
        assert_abs_diff_eq!(growth.net_profit_growth, 4.98, epsilon = 0.01);
        // 1000 against 930
        assert_abs_diff_eq!(growth.asset_growth, 70.0 / 930.0 * 100.0, epsilon = 1e-9);
        assert_eq!(growth.operating_profit_growth, 0.0);
    }

    #[test]
    fn test_operating_and_cash_flow_growth() {
        let qs: Vec<QuarterlyFinancialData> = (0..8)
            .map(|i| {
                let current = i < 4;
                QuarterlyFinancialData {
                    operating_profit: Some(if current { 50.0 } else { 40.0 }),
                    operating_cash_flow: Some(if current { 110.0 } else { -100.0 }),
                    ..QuarterlyFinancialData::new(format!("Q{}", i), -(i as i64))
                }
            })
            .collect();
        let growth = ttm_growth(&qs);

        assert_abs_diff_eq!(growth.operating_profit_growth, 25.0, epsilon = 1e-9);
        // 440 against -400 is measured on the absolute prior value
        assert_abs_diff_eq!(growth.ocf_growth, 210.0, epsilon = 1e-9);
    }

    #[test]
    fn test_insufficient_quarters() {
        let qs = quarters(&[963.0, 830.0, 750.0, 680.0, 900.0, 800.0, 720.0]);
        assert_eq!(ttm_growth(&qs), TtmGrowth::default());
    }

    #[test]
    fn test_percent_change() {
        assert_abs_diff_eq!(percent_change(110.0, 100.0), 10.0, epsilon = 1e-12);
        // Improvement from a loss is positive
        assert_abs_diff_eq!(percent_change(-50.0, -100.0), 50.0, epsilon = 1e-12);
        assert_eq!(percent_change(100.0, 0.0), 0.0);
    }
}
