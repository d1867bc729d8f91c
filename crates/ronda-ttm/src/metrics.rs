//! Trailing-twelve-month sums.

use ronda_core::{FinancialLine, QuarterlyFinancialData};
use serde::{Deserialize, Serialize};

use crate::TTM_QUARTERS;

/// Four-quarter sums of the flow lines of the income and cash-flow statements.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TtmMetrics {
    /// Revenue
    pub revenue: f64,
    /// Gross profit
    pub gross_profit: f64,
    /// Operating profit
    pub operating_profit: f64,
    /// Net profit
    pub net_profit: f64,
    /// Operating cash flow
    pub operating_cash_flow: f64,
    /// Capital expenditure
    pub capex: f64,
    /// Operating cash flow less capital expenditure
    pub free_cash_flow: f64,
    /// Interest expense
    pub interest: f64,
    /// Depreciation and amortization
    pub depreciation: f64,
    /// Income tax
    pub tax: f64,
    /// Operating profit plus depreciation
    pub ebitda: f64,
}

/// Sum the most recent four quarters (fewer if fewer are available).
///
/// Quarters are most-recent-first. Missing or non-finite fields count as zero.
pub fn ttm_metrics(quarters: &[QuarterlyFinancialData]) -> TtmMetrics {
    let window = &quarters[..quarters.len().min(TTM_QUARTERS)];
    let sum = |line: FinancialLine| window.iter().map(|q| q.amount(line)).sum::<f64>();

    let operating_profit = sum(FinancialLine::OperatingProfit);
    let operating_cash_flow = sum(FinancialLine::OperatingCashFlow);
    let capex = sum(FinancialLine::Capex);
    let depreciation = sum(FinancialLine::Depreciation);

    TtmMetrics {
        revenue: sum(FinancialLine::Revenue),
        gross_profit: sum(FinancialLine::GrossProfit),
        operating_profit,
        net_profit: sum(FinancialLine::NetProfit),
        operating_cash_flow,
        capex,
        free_cash_flow: operating_cash_flow - capex,
        interest: sum(FinancialLine::Interest),
        depreciation,
        tax: sum(FinancialLine::Tax),
        ebitda: operating_profit + depreciation,
    }
}
