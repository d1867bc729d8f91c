//! Statistical utility functions shared by the trend and TTM calculators.
//!
//! All moments here are population moments (N denominator). Every function
//! is total: empty input yields `0.0` rather than NaN.

use ndarray::ArrayView1;

use crate::types::DataPoint;

/// Minimum magnitude treated as a non-zero denominator.
pub const MIN_DENOMINATOR: f64 = 1e-12;

/// Period-over-period relative growth rates of a most-recent-first series.
///
/// For each adjacent pair the newer point is `cur` and the older point is
/// `prev`; the rate is `(cur - prev) / prev`. Pairs whose `prev` is zero (or
/// where either value is not finite) are skipped. The returned sequence is in
/// chronological order: the oldest rate first, the latest rate last.
///
/// # Examples
///
/// ```
/// use ronda_core::{DataPoint, stats::growth_rates};
///
/// // Most-recent-first: 121 <- 110 <- 100
/// let series = vec![
///     DataPoint::new("2024", 121.0),
///     DataPoint::new("2023", 110.0),
///     DataPoint::new("2022", 100.0),
/// ];
/// let rates = growth_rates(&series);
/// assert_eq!(rates.len(), 2);
/// assert!((rates[0] - 0.10).abs() < 1e-12);
/// assert!((rates[1] - 0.10).abs() < 1e-12);
/// ```
pub fn growth_rates(series: &[DataPoint]) -> Vec<f64> {
    lagged_growth_rates(series, 1)
}

/// Relative growth of each point against the point `lag` positions older.
///
/// Same conventions as [`growth_rates`]: zero bases are skipped and the
/// result is in chronological order.
pub fn lagged_growth_rates(series: &[DataPoint], lag: usize) -> Vec<f64> {
    if lag == 0 || series.len() <= lag {
        return Vec::new();
    }

    series
        .windows(lag + 1)
        .rev()
        .filter_map(|window| {
            let cur = window[0].value;
            let prev = window[lag].value;
            if prev == 0.0 || !prev.is_finite() || !cur.is_finite() {
                None
            } else {
                Some((cur - prev) / prev)
            }
        })
        .collect()
}

/// Arithmetic mean, `0.0` for empty input.
pub fn mean(values: &[f64]) -> f64 {
    ArrayView1::from(values).mean().unwrap_or(0.0)
}

/// Population variance, `0.0` for empty input.
pub fn population_variance(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    ArrayView1::from(values).var(0.0)
}

/// Population standard deviation, `0.0` for empty input.
pub fn population_std(values: &[f64]) -> f64 {
    population_variance(values).sqrt()
}

/// Ratio that resolves to `0.0` when the denominator is zero or either side
/// is not finite.
pub fn safe_ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator.abs() < MIN_DENOMINATOR || !numerator.is_finite() || !denominator.is_finite() {
        return 0.0;
    }
    numerator / denominator
}
