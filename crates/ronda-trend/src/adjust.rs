//! Seasonal adjustment by per-quarter index.

use ronda_core::{DataPoint, QuarterValues};
use serde::{Deserialize, Serialize};

use crate::pattern::quarter_averages;

/// Deseasonalized series and the indices used to produce it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonalAdjustment {
    /// Input series with each value divided by its quarter's index
    pub adjusted: Vec<DataPoint>,
    /// Quarter average over the grand average; 1.0 is an average quarter
    pub indices: QuarterValues<f64>,
}

/// Remove the quarterly seasonal component from a most-recent-first series.
///
/// Fewer than four points returns the input unchanged with all indices at
/// 1.0. Points whose quarter cannot be determined, or whose index is zero,
/// are passed through unchanged.
pub fn seasonal_adjust(series: &[DataPoint]) -> SeasonalAdjustment {
    if series.len() < 4 {
        return SeasonalAdjustment {
            adjusted: series.to_vec(),
            indices: QuarterValues::splat(1.0),
        };
    }

    let averages = quarter_averages(series);
    let grand = averages.sum() / 4.0;
    let indices = if grand == 0.0 {
        QuarterValues::splat(1.0)
    } else {
        QuarterValues::from_fn(|q| averages[q] / grand)
    };

    let adjusted = series
        .iter()
        .map(|point| match point.calendar_quarter() {
            Some(q) if indices[q] != 0.0 => DataPoint {
                value: point.value / indices[q],
                ..point.clone()
            },
            _ => point.clone(),
        })
        .collect();

    SeasonalAdjustment { adjusted, indices }
}
