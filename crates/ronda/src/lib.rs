#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/ronda/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! # Quick Start
//!
//! ```rust
//! use ronda::prelude::*;
//!
//! let mut company = CompanyFinancials::new("ACME");
//! company.annual = (0..6)
//!     .map(|i| DataPoint::new(format!("FY{}", 2024 - i), 500.0 * 1.1_f64.powi(5 - i)))
//!     .collect();
//!
//! let report = analyze_company(&company, &TrendConfig::default(), 4);
//! assert_eq!(report.symbol, "ACME");
//! assert_eq!(report.trend.trend_direction, TrendDirection::Upward);
//! ```
//!
//! ## Crate Organization
//!
//! - [`model`] - data model, errors and statistics
//! - [`trend`] - historical trend analysis
//! - [`ttm`] - trailing-twelve-month analysis
//! - [`report`] - per-company reports and batch analysis

/// Version information for the ronda crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod report;

pub use report::{CompanyReport, analyze_companies, analyze_company, quarterly_series};

/// Data model, errors and shared statistics.
pub mod model {
    pub use ronda_core::*;
}

/// Historical trend analysis.
///
/// ## Pipeline
///
/// 1. CAGR over 1, 3, 5 and 10 years from the annual series
/// 2. Direction and strength from end-to-end CAGR and growth-rate dispersion
/// 3. Seasonality and volatility from the quarterly series
/// 4. Composite score:
///
/// ```text
/// score = min(cagr_5y * 5, 0.5) * 100 + consistency * 30 + completeness * 20
/// ```
pub mod trend {
    pub use ronda_trend::*;
}

/// Trailing-twelve-month analysis.
pub mod ttm {
    pub use ronda_ttm::*;
}

// Re-export error types
pub use ronda_core::{Result, RondaError};

// Re-export common types
pub use ronda_core::{CompanyFinancials, DataPoint, Quarter, QuarterlyFinancialData};
pub use ronda_trend::{TrendAnalysisResult, TrendConfig, analyze_historical_trends};
pub use ronda_ttm::{TtmCalculationResult, calculate_ttm};

/// Prelude module for convenient imports.
///
/// ```ignore
/// use ronda::prelude::*;
/// ```
pub mod prelude {
    pub use crate::report::{CompanyReport, analyze_companies, analyze_company};
    pub use ronda_core::{
        CompanyFinancials, DataPoint, FinancialLine, Quarter, QuarterlyFinancialData, Result,
        RondaError,
    };
    pub use ronda_trend::{
        HistoricalTrendAnalyzer, StrengthLevel, TrendAnalysisResult, TrendConfig, TrendDirection,
        analyze_historical_trends, cagr,
    };
    pub use ronda_ttm::{TtmCalculationResult, TtmData, calculate_ttm};
}
