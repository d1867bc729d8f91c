//! Magnitude, consistency and acceleration of growth.

use ronda_core::DataPoint;
use ronda_core::stats::{growth_rates, mean, population_variance};
use serde::{Deserialize, Serialize};

use crate::config::ClassifierConfig;

/// Strength components of a series' growth rates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TrendStrength {
    /// Scaled mean absolute growth, in [0, 1].
    pub magnitude: f64,
    /// `1 - std(growth)`, floored at 0.
    pub consistency: f64,
    /// Mean growth of the later half minus mean growth of the earlier half.
    pub acceleration: f64,
}

/// Measure trend strength of a most-recent-first series.
///
/// Uses the default magnitude scale of 10, so a mean absolute growth of 10%
/// or more per period is full magnitude.
pub fn trend_strength(series: &[DataPoint]) -> TrendStrength {
    trend_strength_with(series, ClassifierConfig::default().magnitude_scale)
}

/// [`trend_strength`] with an explicit magnitude scale.
pub fn trend_strength_with(series: &[DataPoint], magnitude_scale: f64) -> TrendStrength {
    if series.len() < 2 {
        return TrendStrength::default();
    }
    let rates = growth_rates(series);
    if rates.is_empty() {
        return TrendStrength::default();
    }
    TrendStrength::from_rates(&rates, magnitude_scale)
}

impl TrendStrength {
    /// Strength of a chronological growth-rate sequence.
    pub fn from_rates(rates: &[f64], magnitude_scale: f64) -> Self {
        if rates.is_empty() {
            return Self::default();
        }

        let mean_abs = rates.iter().map(|g| g.abs()).sum::<f64>() / rates.len() as f64;
        let magnitude = (mean_abs * magnitude_scale).min(1.0);
        let consistency = (1.0 - population_variance(rates).sqrt()).max(0.0);

        let acceleration = if rates.len() < 2 {
            0.0
        } else {
            let (earlier, later) = rates.split_at(rates.len() / 2);
            mean(later) - mean(earlier)
        };

        Self {
            magnitude,
            consistency,
            acceleration,
        }
    }
}
