//! Trend direction and strength classification.

use std::fmt;

use ronda_core::DataPoint;
use serde::{Deserialize, Serialize};

use crate::cagr::cagr;
use crate::config::ClassifierConfig;
use crate::strength::{TrendStrength, trend_strength_with};

/// Overall direction of a series.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    /// CAGR above the dead zone
    Upward,
    /// CAGR below the dead zone
    Downward,
    /// CAGR within the dead zone, or too little data
    #[default]
    Stable,
}

impl fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Upward => write!(f, "upward"),
            Self::Downward => write!(f, "downward"),
            Self::Stable => write!(f, "stable"),
        }
    }
}

/// Qualitative strength of a trend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrengthLevel {
    /// Small or erratic growth
    #[default]
    Weak,
    /// Noticeable, fairly regular growth
    Moderate,
    /// Large, regular growth
    Strong,
}

impl fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Weak => write!(f, "weak"),
            Self::Moderate => write!(f, "moderate"),
            Self::Strong => write!(f, "strong"),
        }
    }
}

/// Result of [`classify_trend`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TrendClassification {
    /// Direction from the end-to-end CAGR
    pub primary: TrendDirection,
    /// Strength from magnitude and consistency
    pub strength: StrengthLevel,
    /// Confidence in the classification, in [0, 1]
    pub confidence: f64,
    /// Consistency of growth, in [0, 1]
    pub consistency: f64,
}

/// Classify the trend of a most-recent-first series with default thresholds.
///
/// # Example
///
/// ```
/// use ronda_core::DataPoint;
/// use ronda_trend::{StrengthLevel, TrendDirection, classify_trend};
///
/// let series: Vec<DataPoint> = (0..5)
///     .map(|i| DataPoint::new(format!("FY{}", 2024 - i), 100.0 * 1.2_f64.powi(4 - i)))
///     .collect();
/// let class = classify_trend(&series);
/// assert_eq!(class.primary, TrendDirection::Upward);
/// assert_eq!(class.strength, StrengthLevel::Strong);
/// ```
pub fn classify_trend(series: &[DataPoint]) -> TrendClassification {
    classify_trend_with(series, &ClassifierConfig::default())
}

/// [`classify_trend`] with explicit thresholds.
pub fn classify_trend_with(series: &[DataPoint], config: &ClassifierConfig) -> TrendClassification {
    if series.len() < 2 {
        return TrendClassification::default();
    }
    let strength = trend_strength_with(series, config.magnitude_scale);
    classify_from_parts(end_to_end_cagr(series), &strength, config)
}

/// CAGR from the oldest to the newest point, one period per step.
pub(crate) fn end_to_end_cagr(series: &[DataPoint]) -> f64 {
    match (series.first(), series.last()) {
        (Some(latest), Some(oldest)) if series.len() >= 2 => {
            cagr(latest.value, oldest.value, (series.len() - 1) as f64)
        }
        _ => 0.0,
    }
}

/// Classification from an already computed CAGR and strength.
pub(crate) fn classify_from_parts(
    growth: f64,
    strength: &TrendStrength,
    config: &ClassifierConfig,
) -> TrendClassification {
    let primary = if growth > config.direction_threshold {
        TrendDirection::Upward
    } else if growth < -config.direction_threshold {
        TrendDirection::Downward
    } else {
        TrendDirection::Stable
    };

    let level = if strength.magnitude > config.strong_magnitude
        && strength.consistency > config.strong_consistency
    {
        StrengthLevel::Strong
    } else if strength.magnitude > config.moderate_magnitude
        && strength.consistency > config.moderate_consistency
    {
        StrengthLevel::Moderate
    } else {
        StrengthLevel::Weak
    };

    let confidence =
        (strength.consistency + strength.magnitude * config.confidence_magnitude_weight).min(1.0);

    TrendClassification {
        primary,
        strength: level,
        confidence,
        consistency: strength.consistency,
    }
}
