//! Growth-rate volatility.

use ronda_core::DataPoint;
use ronda_core::stats::{growth_rates, population_std};

/// Population standard deviation of period-over-period growth rates.
///
/// The series is ordered most-recent-first. Pairs with a zero base are
/// skipped. Fewer than two points yields `0.0`.
///
/// # Example
///
/// ```
/// use ronda_core::DataPoint;
/// use ronda_trend::volatility;
///
/// let steady = vec![
///     DataPoint::new("2024", 121.0),
///     DataPoint::new("2023", 110.0),
///     DataPoint::new("2022", 100.0),
/// ];
/// assert!(volatility(&steady) < 1e-12);
/// ```
pub fn volatility(series: &[DataPoint]) -> f64 {
    if series.len() < 2 {
        return 0.0;
    }
    population_std(&growth_rates(series))
}
