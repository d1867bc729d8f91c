#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/ronda/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Historical trend analysis for financial time series.
//!
//! Every function in this crate is pure and total. Degenerate input (too few
//! points, zero bases, sign flips) resolves to documented neutral values
//! instead of errors.
//!
//! # Example
//!
//! ```rust
//! use ronda_core::DataPoint;
//! use ronda_trend::{TrendDirection, analyze_historical_trends};
//!
//! let annual: Vec<DataPoint> = (0..6)
//!     .map(|i| DataPoint::new(format!("FY{}", 2024 - i), 100.0 * 1.15_f64.powi(5 - i)))
//!     .collect();
//!
//! let result = analyze_historical_trends(&annual, &[]);
//! assert_eq!(result.trend_direction, TrendDirection::Upward);
//! assert!((result.cagr_5y - 0.15).abs() < 1e-9);
//! ```

pub mod adjust;
pub mod cagr;
pub mod classify;
pub mod config;
pub mod historical;
pub mod pattern;
pub mod strength;
pub mod volatility;

// Re-export main types
pub use adjust::{SeasonalAdjustment, seasonal_adjust};
pub use cagr::cagr;
pub use classify::{StrengthLevel, TrendClassification, TrendDirection, classify_trend};
pub use config::{ClassifierConfig, CompletenessConfig, ScoreWeights, TrendConfig};
pub use historical::{HistoricalTrendAnalyzer, TrendAnalysisResult, analyze_historical_trends};
pub use pattern::{GrowthPattern, quarter_averages, quarterly_pattern, yoy_growth_rates};
pub use strength::{TrendStrength, trend_strength};
pub use volatility::volatility;
