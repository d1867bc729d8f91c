//! Wide per-quarter financial statement records.
//!
//! [`QuarterlyFinancialData`] carries every line item the TTM calculators
//! read. All monetary fields are optional: loaders leave a field empty when
//! the statement does not report it, and each aggregator reads fields through
//! [`QuarterlyFinancialData::amount`], which coerces absent or non-finite
//! values to zero.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::{DataPoint, Quarter};

/// Financial statement data for a single quarter.
///
/// All monetary fields share one currency and unit within a series.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuarterlyFinancialData {
    /// Human-readable quarter label (e.g. "Q4 FY24").
    #[serde(default)]
    pub quarter: String,
    /// Monotonic ordering aid; larger is more recent.
    #[serde(default)]
    pub quarter_index: i64,
    /// End date of the reporting period, when known.
    #[serde(default)]
    pub period_end: Option<NaiveDate>,

    // Income statement
    /// Total revenue.
    #[serde(default)]
    pub revenue: Option<f64>,
    /// Gross profit.
    #[serde(default)]
    pub gross_profit: Option<f64>,
    /// Operating profit.
    #[serde(default)]
    pub operating_profit: Option<f64>,
    /// Net profit.
    #[serde(default)]
    pub net_profit: Option<f64>,
    /// Interest expense.
    #[serde(default)]
    pub interest: Option<f64>,
    /// Depreciation and amortization.
    #[serde(default)]
    pub depreciation: Option<f64>,
    /// Income tax expense.
    #[serde(default)]
    pub tax: Option<f64>,

    // Balance sheet
    /// Total assets at quarter end.
    #[serde(default)]
    pub total_assets: Option<f64>,
    /// Shareholders' equity at quarter end.
    #[serde(default)]
    pub shareholders_equity: Option<f64>,
    /// Total debt at quarter end.
    #[serde(default)]
    pub total_debt: Option<f64>,
    /// Working capital at quarter end.
    #[serde(default)]
    pub working_capital: Option<f64>,

    // Cash flow
    /// Operating cash flow.
    #[serde(default)]
    pub operating_cash_flow: Option<f64>,
    /// Capital expenditure, as a positive outflow.
    #[serde(default)]
    pub capex: Option<f64>,
}

impl QuarterlyFinancialData {
    /// Creates an empty record for the given quarter label.
    #[must_use]
    pub fn new(quarter: impl Into<String>, quarter_index: i64) -> Self {
        Self {
            quarter: quarter.into(),
            quarter_index,
            ..Default::default()
        }
    }

    /// Sets the period end date.
    #[must_use]
    pub fn with_period_end(mut self, period_end: NaiveDate) -> Self {
        self.period_end = Some(period_end);
        self
    }

    /// Value of a line item with absent or non-finite values read as zero.
    #[must_use]
    pub fn amount(&self, line: FinancialLine) -> f64 {
        self.reported(line).unwrap_or(0.0)
    }

    /// Value of a line item if it is reported and finite.
    #[must_use]
    pub fn reported(&self, line: FinancialLine) -> Option<f64> {
        let raw = match line {
            FinancialLine::Revenue => self.revenue,
            FinancialLine::GrossProfit => self.gross_profit,
            FinancialLine::OperatingProfit => self.operating_profit,
            FinancialLine::NetProfit => self.net_profit,
            FinancialLine::Interest => self.interest,
            FinancialLine::Depreciation => self.depreciation,
            FinancialLine::Tax => self.tax,
            FinancialLine::TotalAssets => self.total_assets,
            FinancialLine::ShareholdersEquity => self.shareholders_equity,
            FinancialLine::TotalDebt => self.total_debt,
            FinancialLine::WorkingCapital => self.working_capital,
            FinancialLine::OperatingCashFlow => self.operating_cash_flow,
            FinancialLine::Capex => self.capex,
        };
        raw.filter(|v| v.is_finite())
    }

    /// Calendar quarter derived from the period end date.
    #[must_use]
    pub fn calendar_quarter(&self) -> Option<Quarter> {
        self.period_end.map(Quarter::from_date)
    }
}

/// A monetary line item of [`QuarterlyFinancialData`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinancialLine {
    /// Total revenue
    Revenue,
    /// Gross profit
    GrossProfit,
    /// Operating profit
    OperatingProfit,
    /// Net profit
    NetProfit,
    /// Interest expense
    Interest,
    /// Depreciation and amortization
    Depreciation,
    /// Income tax expense
    Tax,
    /// Total assets
    TotalAssets,
    /// Shareholders' equity
    ShareholdersEquity,
    /// Total debt
    TotalDebt,
    /// Working capital
    WorkingCapital,
    /// Operating cash flow
    OperatingCashFlow,
    /// Capital expenditure
    Capex,
}

impl FinancialLine {
    /// Whether the line is a point-in-time balance sheet figure rather than a
    /// flow over the quarter.
    #[must_use]
    pub const fn is_balance(&self) -> bool {
        matches!(
            self,
            Self::TotalAssets | Self::ShareholdersEquity | Self::TotalDebt | Self::WorkingCapital
        )
    }

    /// Turn a statement slice into a single-metric series.
    ///
    /// Order is preserved. Each point is labelled with the record's quarter
    /// label and carries the calendar quarter of its period end date, if any.
    #[must_use]
    pub fn extract_series(&self, records: &[QuarterlyFinancialData]) -> Vec<DataPoint> {
        records
            .iter()
            .map(|record| DataPoint {
                period: record.quarter.clone(),
                value: record.amount(*self),
                quarter: record.calendar_quarter(),
            })
            .collect()
    }
}

/// Everything the engine needs about one company.
///
/// All series are ordered most-recent-first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompanyFinancials {
    /// Ticker or other identifier.
    pub symbol: String,
    /// Annual observations of the tracked metric.
    #[serde(default)]
    pub annual: Vec<DataPoint>,
    /// Quarterly observations of the tracked metric.
    #[serde(default)]
    pub quarterly: Vec<DataPoint>,
    /// Quarterly statements for TTM analysis.
    #[serde(default)]
    pub statements: Vec<QuarterlyFinancialData>,
}

impl CompanyFinancials {
    /// Creates an empty record for the given symbol.
    #[must_use]
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            ..Default::default()
        }
    }
}
