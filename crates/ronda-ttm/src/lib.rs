#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/ronda/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! # Example
//!
//! ```rust
//! use ronda_core::QuarterlyFinancialData;
//! use ronda_ttm::calculate_ttm;
//!
//! let quarters: Vec<QuarterlyFinancialData> = [963.0, 830.0, 750.0, 680.0]
//!     .iter()
//!     .enumerate()
//!     .map(|(i, &revenue)| QuarterlyFinancialData {
//!         revenue: Some(revenue),
//!         ..QuarterlyFinancialData::new(format!("Q{} FY24", 4 - i), 4 - i as i64)
//!     })
//!     .collect();
//!
//! let result = calculate_ttm(&quarters, 4);
//! assert_eq!(result.metrics.revenue, 3223.0);
//! assert!(result.growth.is_none());
//! ```

pub mod growth;
pub mod margins;
pub mod metrics;
pub mod ratios;
pub mod series;

/// Quarters in one trailing-twelve-month window.
pub const TTM_QUARTERS: usize = 4;

// Re-export main types
pub use growth::{TtmGrowth, ttm_growth};
pub use margins::{TtmMargins, ttm_margins};
pub use metrics::{TtmMetrics, ttm_metrics};
pub use ratios::{TtmRatios, ttm_ratios};
pub use series::{TtmCalculationResult, TtmData, calculate_ttm, create_ttm_data_series};
