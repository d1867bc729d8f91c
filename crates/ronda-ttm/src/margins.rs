//! TTM margins as a percentage of revenue.

use ronda_core::stats::safe_ratio;
use serde::{Deserialize, Serialize};

use crate::metrics::TtmMetrics;

/// Profitability and cash margins, in percent of TTM revenue.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TtmMargins {
    /// Gross profit / revenue
    pub gross_margin: f64,
    /// Operating profit / revenue
    pub operating_margin: f64,
    /// Net profit / revenue
    pub net_margin: f64,
    /// Operating cash flow / revenue
    pub ocf_margin: f64,
    /// Free cash flow / revenue
    pub fcf_margin: f64,
    /// EBITDA / revenue
    pub ebitda_margin: f64,
}

/// Margins of a TTM snapshot. Zero revenue gives all-zero margins.
pub fn ttm_margins(metrics: &TtmMetrics) -> TtmMargins {
    let pct = |line: f64| safe_ratio(line, metrics.revenue) * 100.0;

    TtmMargins {
        gross_margin: pct(metrics.gross_profit),
        operating_margin: pct(metrics.operating_profit),
        net_margin: pct(metrics.net_profit),
        ocf_margin: pct(metrics.operating_cash_flow),
        fcf_margin: pct(metrics.free_cash_flow),
        ebitda_margin: pct(metrics.ebitda),
    }
}
