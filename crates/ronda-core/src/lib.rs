#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/ronda/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Core data model for the Ronda trend engine.
//!
//! This crate provides the value types every calculator consumes, the error
//! type used at the fallible edges (parsing, configuration, loading), and the
//! statistics shared by the trend and TTM crates.

/// The version of the ronda-core crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Module declarations
pub mod error;
pub mod financials;
pub mod stats;
pub mod types;

// Re-exports
pub use error::{RondaError, Result};
pub use financials::{CompanyFinancials, FinancialLine, QuarterlyFinancialData};
pub use types::{DataPoint, Quarter, QuarterValues};
