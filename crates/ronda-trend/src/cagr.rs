//! Compound annual growth rate.

use tracing::trace;

/// Compound annual growth rate between two values.
///
/// ```text
/// CAGR = (end / start)^(1 / years) - 1
/// ```
///
/// The function is total and uses sentinel values for degenerate input:
///
/// | Input                                        | Result                        |
/// |----------------------------------------------|-------------------------------|
/// | `start == 0` or `years <= 0`, `end == 0 && start > 0` | `-1.0` (declined to zero) |
/// | `start == 0` or `years <= 0`, otherwise      | `0.0`                         |
/// | `end == start`                               | `0.0` exactly                 |
/// | either value negative, `years == 1`          | `(end - start) / abs(start)`  |
/// | either value negative, `years > 1`           | `0.0` (undefined over a sign change) |
/// | any non-finite input                         | `0.0`                         |
///
/// # Examples
///
/// ```
/// use ronda_trend::cagr;
///
/// assert!((cagr(1100.0, 1000.0, 1.0) - 0.10).abs() < 1e-12);
/// assert!((cagr(900.0, 1000.0, 1.0) + 0.10).abs() < 1e-12);
/// assert_eq!(cagr(0.0, 1000.0, 3.0), -1.0);
/// assert_eq!(cagr(500.0, 0.0, 3.0), 0.0);
/// ```
pub fn cagr(end_value: f64, start_value: f64, years: f64) -> f64 {
    if !(end_value.is_finite() && start_value.is_finite() && years.is_finite()) {
        trace!(end_value, start_value, years, "non-finite CAGR input");
        return 0.0;
    }

    if start_value == 0.0 || years <= 0.0 {
        trace!(start_value, years, "degenerate CAGR base or span");
        return if end_value == 0.0 && start_value > 0.0 {
            -1.0
        } else {
            0.0
        };
    }

    if end_value == start_value {
        return 0.0;
    }

    if end_value < 0.0 || start_value < 0.0 {
        if years == 1.0 {
            return (end_value - start_value) / start_value.abs();
        }
        trace!(end_value, start_value, years, "CAGR undefined across sign change");
        return 0.0;
    }

    let rate = (end_value / start_value).powf(1.0 / years) - 1.0;
    if rate.is_finite() { rate } else { 0.0 }
}
