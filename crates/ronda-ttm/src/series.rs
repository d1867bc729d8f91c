//! Rolling TTM snapshots and the per-company TTM calculation.

use ronda_core::QuarterlyFinancialData;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace};

use crate::TTM_QUARTERS;
use crate::growth::{GROWTH_QUARTERS, TtmGrowth, ttm_growth};
use crate::margins::{TtmMargins, ttm_margins};
use crate::metrics::{TtmMetrics, ttm_metrics};
use crate::ratios::{TtmRatios, ttm_ratios};

/// One TTM snapshot ending at a given quarter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TtmData {
    /// Label of the latest quarter in the window
    pub period: String,
    /// Four-quarter sums
    pub metrics: TtmMetrics,
    /// Margins of the sums
    pub margins: TtmMargins,
    /// Ratios over the window
    pub ratios: TtmRatios,
    /// Growth against the prior window, when eight quarters are available
    pub growth: Option<TtmGrowth>,
    /// Labels of the quarters in the window, most recent first
    pub quarters: Vec<String>,
}

impl TtmData {
    /// Snapshot of the window starting at `quarters[0]`.
    fn from_window(quarters: &[QuarterlyFinancialData]) -> Self {
        let window = &quarters[..quarters.len().min(TTM_QUARTERS)];
        let metrics = ttm_metrics(window);

        Self {
            period: window.first().map(|q| q.quarter.clone()).unwrap_or_default(),
            margins: ttm_margins(&metrics),
            ratios: ttm_ratios(window, &metrics),
            growth: (quarters.len() >= GROWTH_QUARTERS).then(|| ttm_growth(quarters)),
            quarters: window.iter().map(|q| q.quarter.clone()).collect(),
            metrics,
        }
    }
}

/// Rolling TTM snapshots, most recent first.
///
/// Window `i` covers `quarters[i..i + 4]`. Windows are emitted only while a
/// full four quarters remain, up to `max_windows` of them. Growth is present
/// when eight quarters are available from the window's start.
pub fn create_ttm_data_series(quarters: &[QuarterlyFinancialData], max_windows: usize) -> Vec<TtmData> {
    (0..max_windows)
        .take_while(|&i| i + TTM_QUARTERS <= quarters.len())
        .map(|i| TtmData::from_window(&quarters[i..]))
        .collect()
}

/// Current TTM figures plus a rolling history for one company.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TtmCalculationResult {
    /// Sums of the latest four quarters
    pub metrics: TtmMetrics,
    /// Margins of the latest sums
    pub margins: TtmMargins,
    /// Ratios of the latest window
    pub ratios: TtmRatios,
    /// Growth against the prior window, when eight quarters are available
    pub growth: Option<TtmGrowth>,
    /// Rolling snapshots, most recent first
    pub series: Vec<TtmData>,
    /// Number of quarters supplied
    pub quarters_available: usize,
}

/// Compute TTM metrics, margins, ratios, growth and up to `windows` rolling
/// snapshots from most-recent-first quarterly statements.
///
/// Fewer than four quarters still produce partial sums for the current
/// figures, but no rolling snapshots.
#[instrument(skip(quarters), fields(available = quarters.len()))]
pub fn calculate_ttm(quarters: &[QuarterlyFinancialData], windows: usize) -> TtmCalculationResult {
    if quarters.len() < TTM_QUARTERS {
        trace!(available = quarters.len(), "partial TTM window");
    }

    let current = TtmData::from_window(quarters);
    let series = create_ttm_data_series(quarters, windows);

    debug!(
        revenue = current.metrics.revenue,
        net_margin = current.margins.net_margin,
        snapshots = series.len(),
        "TTM calculation complete"
    );

    TtmCalculationResult {
        metrics: current.metrics,
        margins: current.margins,
        ratios: current.ratios,
        growth: current.growth,
        series,
        quarters_available: quarters.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn history(count: usize) -> Vec<QuarterlyFinancialData> {
        (0..count)
            .map(|i| QuarterlyFinancialData {
                revenue: Some(1000.0 - 20.0 * i as f64),
                net_profit: Some(100.0 - i as f64),
                total_assets: Some(5000.0),
                shareholders_equity: Some(2000.0),
                ..QuarterlyFinancialData::new(format!("T-{}", i), (count - i) as i64)
            })
            .collect()
    }

    #[test]
    fn test_rolling_series_order_and_growth() {
        let qs = history(12);
        let series = create_ttm_data_series(&qs, 8);

        // Twelve quarters hold nine full windows; capped at eight
        assert_eq!(series.len(), 8);
        assert_eq!(series[0].period, "T-0");
        assert_eq!(series[7].period, "T-7");
        assert_eq!(series[2].quarters, vec!["T-2", "T-3", "T-4", "T-5"]);

        // Growth only while eight quarters remain: i <= 4
        for (i, snapshot) in series.iter().enumerate() {
            assert_eq!(snapshot.growth.is_some(), i <= 4, "window {}", i);
            assert_eq!(snapshot.quarters.len(), 4);
        }
    }

    #[test]
    fn test_series_stops_at_last_full_window() {
        assert_eq!(create_ttm_data_series(&history(6), 10).len(), 3);
        assert!(create_ttm_data_series(&history(3), 4).is_empty());
        assert!(create_ttm_data_series(&history(8), 0).is_empty());
    }

    #[test]
    fn test_calculate_ttm() {
        let qs = history(9);
        let result = calculate_ttm(&qs, 4);

        // 1000 + 980 + 960 + 940
        assert_abs_diff_eq!(result.metrics.revenue, 3880.0, epsilon = 1e-9);
        assert_abs_diff_eq!(result.metrics.net_profit, 394.0, epsilon = 1e-9);
        assert_abs_diff_eq!(result.ratios.roe, 394.0 / 2000.0 * 100.0, epsilon = 1e-9);
        assert!(result.growth.is_some());
        assert_eq!(result.series.len(), 4);
        assert_eq!(result.series[0].metrics, result.metrics);
        assert_eq!(result.quarters_available, 9);
    }

    #[test]
    fn test_snapshot_serde_round_trip() {
        let series = create_ttm_data_series(&history(8), 3);
        assert!(series[0].growth.is_some());
        assert!(series[1].growth.is_none());

        let json = serde_json::to_value(&series).unwrap();
        assert!(json[0]["growth"].is_object());
        assert!(json[1]["growth"].is_null());
        assert_eq!(json[1]["quarters"][0], "T-1");

        let back: Vec<TtmData> = serde_json::from_value(json).unwrap();
        assert_eq!(back, series);
    }

    #[test]
    fn test_calculate_ttm_short_history() {
        let result = calculate_ttm(&history(2), 4);
        assert_abs_diff_eq!(result.metrics.revenue, 1980.0, epsilon = 1e-9);
        assert!(result.growth.is_none());
        assert!(result.series.is_empty());

        let empty = calculate_ttm(&[], 4);
        assert_eq!(empty.metrics, TtmMetrics::default());
        assert_eq!(empty.quarters_available, 0);
    }
}
