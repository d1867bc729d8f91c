//! Thresholds and weights for trend analysis.
//!
//! The defaults are the engine's documented constants. Every struct is
//! `#[serde(default)]`, so a config file only needs the fields it overrides.

use ronda_core::{Result, RondaError};
use serde::{Deserialize, Serialize};

/// Configuration for the historical trend pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrendConfig {
    /// Direction and strength classification thresholds.
    pub classifier: ClassifierConfig,
    /// History lengths treated as complete.
    pub completeness: CompletenessConfig,
    /// Composite trend score weights.
    pub score: ScoreWeights,
}

impl TrendConfig {
    /// Check that every threshold is finite and in range.
    ///
    /// # Errors
    ///
    /// Returns [`RondaError::InvalidConfig`] naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        self.classifier.validate()?;
        self.completeness.validate()?;
        self.score.validate()
    }
}

/// Thresholds used to classify trend direction and strength.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// CAGR dead zone: `|cagr| <= threshold` is a stable trend (default: 0.02)
    pub direction_threshold: f64,
    /// Multiplier applied to mean absolute growth before capping at 1 (default: 10.0)
    pub magnitude_scale: f64,
    /// Minimum magnitude for a strong trend (default: 0.8)
    pub strong_magnitude: f64,
    /// Minimum consistency for a strong trend (default: 0.7)
    pub strong_consistency: f64,
    /// Minimum magnitude for a moderate trend (default: 0.5)
    pub moderate_magnitude: f64,
    /// Minimum consistency for a moderate trend (default: 0.6)
    pub moderate_consistency: f64,
    /// Weight of magnitude in the confidence score (default: 0.3)
    pub confidence_magnitude_weight: f64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            direction_threshold: 0.02,
            magnitude_scale: 10.0,
            strong_magnitude: 0.8,
            strong_consistency: 0.7,
            moderate_magnitude: 0.5,
            moderate_consistency: 0.6,
            confidence_magnitude_weight: 0.3,
        }
    }
}

impl ClassifierConfig {
    fn validate(&self) -> Result<()> {
        non_negative("classifier.direction_threshold", self.direction_threshold)?;
        if !(self.magnitude_scale.is_finite() && self.magnitude_scale > 0.0) {
            return Err(RondaError::InvalidConfig(format!(
                "classifier.magnitude_scale must be positive, got {}",
                self.magnitude_scale
            )));
        }
        unit_interval("classifier.strong_magnitude", self.strong_magnitude)?;
        unit_interval("classifier.strong_consistency", self.strong_consistency)?;
        unit_interval("classifier.moderate_magnitude", self.moderate_magnitude)?;
        unit_interval("classifier.moderate_consistency", self.moderate_consistency)?;
        non_negative(
            "classifier.confidence_magnitude_weight",
            self.confidence_magnitude_weight,
        )
    }
}

/// History lengths at which data completeness reaches 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompletenessConfig {
    /// Annual points for a complete history (default: 12)
    pub annual_periods: usize,
    /// Quarterly points for a complete trailing window, 12 deltas plus an
    /// anchor (default: 13)
    pub quarterly_periods: usize,
    /// Completeness assumed for the quarterly half when no quarterly series
    /// is supplied (default: 0.5)
    pub missing_quarterly: f64,
}

impl Default for CompletenessConfig {
    fn default() -> Self {
        Self {
            annual_periods: 12,
            quarterly_periods: 13,
            missing_quarterly: 0.5,
        }
    }
}

impl CompletenessConfig {
    /// Completeness of a series of `count` points against `periods`.
    #[must_use]
    pub fn ratio(count: usize, periods: usize) -> f64 {
        if periods == 0 {
            return 1.0;
        }
        (count as f64 / periods as f64).min(1.0)
    }

    fn validate(&self) -> Result<()> {
        if self.annual_periods == 0 || self.quarterly_periods == 0 {
            return Err(RondaError::InvalidConfig(
                "completeness periods must be at least 1".to_string(),
            ));
        }
        unit_interval("completeness.missing_quarterly", self.missing_quarterly)
    }
}

/// Weights of the composite 0-100 trend score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreWeights {
    /// Multiplier on the 5-year CAGR (default: 5.0)
    pub growth_multiplier: f64,
    /// Cap on the scaled growth term before conversion to points (default: 0.5)
    pub growth_cap: f64,
    /// Points awarded for full consistency (default: 30.0)
    pub consistency: f64,
    /// Points awarded for complete data (default: 20.0)
    pub completeness: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            growth_multiplier: 5.0,
            growth_cap: 0.5,
            consistency: 30.0,
            completeness: 20.0,
        }
    }
}

impl ScoreWeights {
    fn validate(&self) -> Result<()> {
        non_negative("score.growth_multiplier", self.growth_multiplier)?;
        non_negative("score.growth_cap", self.growth_cap)?;
        non_negative("score.consistency", self.consistency)?;
        non_negative("score.completeness", self.completeness)
    }
}

fn non_negative(field: &str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(RondaError::InvalidConfig(format!(
            "{} must be a non-negative number, got {}",
            field, value
        )))
    }
}

fn unit_interval(field: &str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(RondaError::InvalidConfig(format!(
            "{} must be within [0, 1], got {}",
            field, value
        )))
    }
}
