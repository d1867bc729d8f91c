//! Quarterly growth pattern and seasonality.
//!
//! Points are bucketed by calendar quarter (see
//! [`DataPoint::calendar_quarter`]). Points whose quarter cannot be
//! determined are left out of the buckets but still count towards growth
//! rates and completeness.

use ronda_core::stats::{growth_rates, lagged_growth_rates, mean, population_std, population_variance};
use ronda_core::{DataPoint, QuarterValues};
use serde::{Deserialize, Serialize};

use crate::config::CompletenessConfig;

/// Quarter-over-quarter growth and seasonality profile of a series.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GrowthPattern {
    /// Coefficient of variation of the quarter averages, clamped to [0, 1].
    /// Near 0 means no seasonal pattern.
    pub seasonality_score: f64,
    /// Mean value per calendar quarter; empty buckets are 0.
    pub quarter_averages: QuarterValues<f64>,
    /// Quarter-over-quarter growth rates, oldest first.
    pub growth_rates: Vec<f64>,
    /// Year-over-year growth rates (each quarter against four quarters
    /// earlier), oldest first.
    pub yoy_growth_rates: Vec<f64>,
    /// Population variance of the quarter-over-quarter growth rates.
    pub growth_variance: f64,
    /// Share of a complete trailing window that is present, in [0, 1].
    pub data_completeness: f64,
    /// Population standard deviation of the quarter-over-quarter growth rates.
    pub volatility: f64,
}

/// Analyze the quarterly growth pattern of a most-recent-first series.
///
/// Fewer than two points yields [`GrowthPattern::default`].
pub fn quarterly_pattern(series: &[DataPoint]) -> GrowthPattern {
    quarterly_pattern_with(series, &CompletenessConfig::default())
}

/// [`quarterly_pattern`] with an explicit completeness window.
pub fn quarterly_pattern_with(series: &[DataPoint], completeness: &CompletenessConfig) -> GrowthPattern {
    if series.len() < 2 {
        return GrowthPattern::default();
    }

    let rates = growth_rates(series);
    let quarter_averages = quarter_averages(series);

    GrowthPattern {
        seasonality_score: seasonality_score(&quarter_averages),
        quarter_averages,
        growth_variance: population_variance(&rates),
        volatility: population_std(&rates),
        yoy_growth_rates: yoy_growth_rates(series),
        growth_rates: rates,
        data_completeness: CompletenessConfig::ratio(series.len(), completeness.quarterly_periods),
    }
}

/// Arithmetic mean of the values in each calendar-quarter bucket.
///
/// Points without a recognizable quarter are skipped. A quarter with no
/// points averages to `0.0`.
pub fn quarter_averages(series: &[DataPoint]) -> QuarterValues<f64> {
    let mut sums = QuarterValues::splat(0.0);
    let mut counts = QuarterValues::splat(0usize);

    for point in series {
        if let Some(quarter) = point.calendar_quarter()
            && point.value.is_finite()
        {
            sums[quarter] += point.value;
            counts[quarter] += 1;
        }
    }

    QuarterValues::from_fn(|q| {
        if counts[q] > 0 {
            sums[q] / counts[q] as f64
        } else {
            0.0
        }
    })
}

/// Year-over-year growth of a most-recent-first quarterly series.
///
/// Each quarter is compared to the quarter four positions older; zero bases
/// are skipped. Result is oldest first.
pub fn yoy_growth_rates(series: &[DataPoint]) -> Vec<f64> {
    lagged_growth_rates(series, 4)
}

/// Population standard deviation of the four averages over their mean,
/// clamped to [0, 1]. A non-positive mean yields 0.
fn seasonality_score(averages: &QuarterValues<f64>) -> f64 {
    let values = averages.to_array();
    let avg = mean(&values);
    if avg <= 0.0 {
        return 0.0;
    }
    (population_std(&values) / avg).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ronda_core::Quarter;

    const MONTHS: [&str; 4] = ["Dec", "Sep", "Jun", "Mar"];

    /// Most-recent-first quarterly series ending in Dec 2024.
    fn quarterly(values: &[f64]) -> Vec<DataPoint> {
        values
            .iter()
            .enumerate()
            .map(|(i, &v)| DataPoint::new(format!("{} {}", MONTHS[i % 4], 2024 - (i / 4) as i32), v))
            .collect()
    }

    #[test]
    fn test_short_series_is_empty() {
        assert_eq!(quarterly_pattern(&[]), GrowthPattern::default());
        assert_eq!(quarterly_pattern(&quarterly(&[10.0])), GrowthPattern::default());
    }

    #[test]
    fn test_flat_series_has_no_seasonality() {
        let pattern = quarterly_pattern(&quarterly(&[100.0; 8]));

        assert_abs_diff_eq!(pattern.seasonality_score, 0.0, epsilon = 1e-12);
        assert_eq!(pattern.growth_rates.len(), 7);
        assert!(pattern.growth_rates.iter().all(|r| r.abs() < 1e-12));
        assert_abs_diff_eq!(pattern.growth_variance, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(pattern.data_completeness, 8.0 / 13.0, epsilon = 1e-12);
    }

    #[test]
    fn test_seasonal_series() {
        // Q4 strong, Q1 weak: Dec=140, Sep=100, Jun=100, Mar=60, repeated
        let values: Vec<f64> = (0..12).map(|i| [140.0, 100.0, 100.0, 60.0][i % 4]).collect();
        let pattern = quarterly_pattern(&quarterly(&values));

        assert_abs_diff_eq!(pattern.quarter_averages[Quarter::Q4], 140.0, epsilon = 1e-12);
        assert_abs_diff_eq!(pattern.quarter_averages[Quarter::Q1], 60.0, epsilon = 1e-12);

        // std of [60, 100, 100, 140] = sqrt(800) over mean 100
        assert_abs_diff_eq!(pattern.seasonality_score, 800f64.sqrt() / 100.0, epsilon = 1e-12);
        assert!(pattern.volatility > 0.0);
        assert_abs_diff_eq!(pattern.volatility, pattern.growth_variance.sqrt(), epsilon = 1e-12);

        // Same quarter each year, so YoY growth is flat
        assert_eq!(pattern.yoy_growth_rates.len(), 8);
        assert!(pattern.yoy_growth_rates.iter().all(|r| r.abs() < 1e-12));
    }

    #[test]
    fn test_completeness_caps_at_one() {
        let pattern = quarterly_pattern(&quarterly(&[100.0; 20]));
        assert_abs_diff_eq!(pattern.data_completeness, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_unrecognized_labels_excluded_from_buckets() {
        let series = vec![
            DataPoint::new("Q4 FY24", 500.0),
            DataPoint::new("Dec 2023", 100.0),
            DataPoint::new("Sep 2023", 100.0),
        ];
        let pattern = quarterly_pattern(&series);

        assert_abs_diff_eq!(pattern.quarter_averages[Quarter::Q4], 100.0, epsilon = 1e-12);
        assert_eq!(pattern.quarter_averages[Quarter::Q1], 0.0);
        // Unlabelled point still contributes a growth rate
        assert_eq!(pattern.growth_rates.len(), 2);
        assert_abs_diff_eq!(pattern.growth_rates[1], 4.0, epsilon = 1e-12);
    }

    #[test]
    fn test_seasonality_score_clamped() {
        // Only Q4 is populated: averages [0, 0, 0, 95] give a raw ratio of sqrt(3)
        let series = vec![
            DataPoint::new("Dec 2024", 100.0),
            DataPoint::new("Dec 2023", 90.0),
            DataPoint::new("FY", 80.0),
        ];
        let pattern = quarterly_pattern(&series);

        assert_eq!(pattern.quarter_averages.to_array(), [0.0, 0.0, 0.0, 95.0]);
        assert_eq!(pattern.seasonality_score, 1.0);
    }

    #[test]
    fn test_explicit_quarter_overrides_label() {
        let series = vec![
            DataPoint::new("Q3 FY25", 80.0).with_quarter(Quarter::Q4),
            DataPoint::new("Q2 FY25", 40.0).with_quarter(Quarter::Q3),
        ];
        let averages = quarter_averages(&series);
        assert_eq!(averages[Quarter::Q4], 80.0);
        assert_eq!(averages[Quarter::Q3], 40.0);
    }
}
