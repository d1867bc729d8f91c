//! CAGR command implementation.

use crate::cmd::pct;
use ronda_trend::cagr;

/// Print the compound annual growth rate between two values.
pub(crate) fn show_cagr(end: f64, start: f64, years: f64) {
    let rate = cagr(end, start, years);
    println!("CAGR: {} ({:.6})", pct(rate), rate);
    if start > 0.0 && end > 0.0 && years > 0.0 {
        println!("{:.2} -> {:.2} over {} year(s)", start, end, years);
    }
}
