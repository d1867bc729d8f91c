//! Historical trend pipeline combining every calculator in this crate.

use ronda_core::DataPoint;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::adjust::{SeasonalAdjustment, seasonal_adjust};
use crate::cagr::cagr;
use crate::classify::{StrengthLevel, TrendDirection, classify_from_parts, end_to_end_cagr};
use crate::config::{CompletenessConfig, TrendConfig};
use crate::pattern::{GrowthPattern, quarterly_pattern_with};
use crate::strength::trend_strength_with;
use crate::volatility::volatility;

/// CAGR horizons reported by the analyzer, in years.
const HORIZONS: [usize; 4] = [1, 3, 5, 10];

/// Complete trend analysis of one company.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrendAnalysisResult {
    /// One-year CAGR of the annual series
    pub cagr_1y: f64,
    /// Three-year CAGR of the annual series
    pub cagr_3y: f64,
    /// Five-year CAGR of the annual series
    pub cagr_5y: f64,
    /// Ten-year CAGR of the annual series
    pub cagr_10y: f64,
    /// Direction of the annual series
    pub trend_direction: TrendDirection,
    /// Strength of the annual series
    pub trend_strength: StrengthLevel,
    /// Classification confidence, in [0, 1]
    pub confidence: f64,
    /// Consistency of annual growth, in [0, 1]
    pub consistency: f64,
    /// Scaled mean absolute annual growth, in [0, 1]
    pub magnitude: f64,
    /// Change in mean annual growth between the earlier and later halves
    pub acceleration: f64,
    /// Seasonality score of the quarterly series, in [0, 1]
    pub seasonality: f64,
    /// Volatility of quarter-over-quarter growth
    pub volatility: f64,
    /// Volatility of year-over-year annual growth
    pub annual_volatility: f64,
    /// Full quarterly growth pattern
    pub quarterly_pattern: GrowthPattern,
    /// Deseasonalized quarterly series, when at least four quarters exist
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seasonal_adjustment: Option<SeasonalAdjustment>,
    /// Data completeness, in [0, 1]
    pub data_completeness: f64,
    /// Composite score, in [0, 100]
    pub trend_score: f64,
}

/// Runs the historical trend pipeline with a fixed configuration.
///
/// # Example
///
/// ```
/// use ronda_core::DataPoint;
/// use ronda_trend::{HistoricalTrendAnalyzer, TrendConfig};
///
/// let analyzer = HistoricalTrendAnalyzer::new(TrendConfig::default());
/// let annual = vec![DataPoint::new("FY24", 121.0), DataPoint::new("FY23", 110.0)];
/// let result = analyzer.analyze(&annual, &[]);
/// assert!((result.cagr_1y - 0.10).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Default)]
pub struct HistoricalTrendAnalyzer {
    config: TrendConfig,
}

impl HistoricalTrendAnalyzer {
    /// Create an analyzer with the given configuration.
    pub const fn new(config: TrendConfig) -> Self {
        Self { config }
    }

    /// Configuration in use.
    pub const fn config(&self) -> &TrendConfig {
        &self.config
    }

    /// Analyze a most-recent-first annual series and an optional
    /// most-recent-first quarterly series (empty means absent).
    ///
    /// An empty annual series yields [`TrendAnalysisResult::default`].
    #[instrument(skip_all, fields(annual = annual.len(), quarterly = quarterly.len()))]
    pub fn analyze(&self, annual: &[DataPoint], quarterly: &[DataPoint]) -> TrendAnalysisResult {
        if annual.is_empty() {
            debug!("no annual data, returning empty analysis");
            return TrendAnalysisResult::default();
        }

        let classifier = &self.config.classifier;
        let [cagr_1y, cagr_3y, cagr_5y, cagr_10y] = HORIZONS.map(|years| horizon_cagr(annual, years));

        let strength = trend_strength_with(annual, classifier.magnitude_scale);
        let classification = classify_from_parts(end_to_end_cagr(annual), &strength, classifier);

        let has_quarterly = !quarterly.is_empty();
        let pattern = if has_quarterly {
            quarterly_pattern_with(quarterly, &self.config.completeness)
        } else {
            GrowthPattern::default()
        };
        let seasonal_adjustment = (quarterly.len() >= 4).then(|| seasonal_adjust(quarterly));

        let data_completeness = self.data_completeness(annual.len(), has_quarterly.then_some(quarterly.len()));
        let trend_score = self.trend_score(cagr_5y, classification.consistency, data_completeness);

        debug!(
            direction = %classification.primary,
            strength = %classification.strength,
            cagr_5y,
            trend_score,
            "historical trend analysis complete"
        );

        TrendAnalysisResult {
            cagr_1y,
            cagr_3y,
            cagr_5y,
            cagr_10y,
            trend_direction: classification.primary,
            trend_strength: classification.strength,
            confidence: classification.confidence,
            consistency: classification.consistency,
            magnitude: strength.magnitude,
            acceleration: strength.acceleration,
            seasonality: pattern.seasonality_score,
            volatility: pattern.volatility,
            annual_volatility: volatility(annual),
            quarterly_pattern: pattern,
            seasonal_adjustment,
            data_completeness,
            trend_score,
        }
    }

    /// Mean of annual and quarterly completeness; a missing quarterly series
    /// contributes the configured placeholder.
    fn data_completeness(&self, annual: usize, quarterly: Option<usize>) -> f64 {
        let completeness = &self.config.completeness;
        let annual = CompletenessConfig::ratio(annual, completeness.annual_periods);
        let quarterly = match quarterly {
            Some(count) => CompletenessConfig::ratio(count, completeness.quarterly_periods),
            None => completeness.missing_quarterly,
        };
        (annual + quarterly) / 2.0
    }

    fn trend_score(&self, cagr_5y: f64, consistency: f64, completeness: f64) -> f64 {
        let weights = &self.config.score;
        let growth = (cagr_5y * weights.growth_multiplier).min(weights.growth_cap) * 100.0;
        (growth + consistency * weights.consistency + completeness * weights.completeness).clamp(0.0, 100.0)
    }
}

/// Analyze trends with the default configuration.
///
/// See [`HistoricalTrendAnalyzer::analyze`].
pub fn analyze_historical_trends(annual: &[DataPoint], quarterly: &[DataPoint]) -> TrendAnalysisResult {
    HistoricalTrendAnalyzer::default().analyze(annual, quarterly)
}

/// CAGR of the latest value against the value `years` positions older, or 0
/// when the series is too short.
fn horizon_cagr(annual: &[DataPoint], years: usize) -> f64 {
    match (annual.first(), annual.get(years)) {
        (Some(latest), Some(base)) => cagr(latest.value, base.value, years as f64),
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const MONTHS: [&str; 4] = ["Dec", "Sep", "Jun", "Mar"];

    fn annual(growth: f64, years: usize) -> Vec<DataPoint> {
        (0..years)
            .map(|i| DataPoint::new(format!("FY{}", 2024 - i), 1000.0 * (1.0 + growth).powi((years - 1 - i) as i32)))
            .collect()
    }

    fn seasonal_quarters(count: usize) -> Vec<DataPoint> {
        (0..count)
            .map(|i| {
                let base = 250.0 * 1.02f64.powi((count - 1 - i) as i32);
                let factor = [1.3, 0.95, 1.05, 0.7][i % 4];
                DataPoint::new(format!("{} {}", MONTHS[i % 4], 2024 - i / 4), base * factor)
            })
            .collect()
    }

    #[test]
    fn test_full_history() {
        let result = analyze_historical_trends(&annual(0.12, 12), &seasonal_quarters(13));

        for value in [result.cagr_1y, result.cagr_3y, result.cagr_5y, result.cagr_10y] {
            assert!(value != 0.0);
            assert_abs_diff_eq!(value, 0.12, epsilon = 1e-9);
        }
        assert!((0.0..=100.0).contains(&result.trend_score));
        assert_eq!(result.trend_direction, TrendDirection::Upward);
        assert_eq!(result.trend_strength, StrengthLevel::Strong);
        assert!(result.seasonality > 0.0);
        assert!(result.volatility > 0.0);
        assert_abs_diff_eq!(result.data_completeness, 1.0, epsilon = 1e-12);

        let adjustment = result.seasonal_adjustment.as_ref().unwrap();
        assert_abs_diff_eq!(adjustment.indices.sum(), 4.0, epsilon = 1e-9);
        assert_eq!(adjustment.adjusted.len(), 13);
    }

    #[test]
    fn test_score_saturates() {
        // 12% CAGR * 5 caps at 0.5: 50 + 30 + 20
        let result = analyze_historical_trends(&annual(0.12, 12), &seasonal_quarters(13));
        assert_abs_diff_eq!(result.trend_score, 100.0, epsilon = 1e-6);
    }

    #[test]
    fn test_short_history_horizons() {
        let result = analyze_historical_trends(&annual(0.10, 4), &[]);

        assert_abs_diff_eq!(result.cagr_1y, 0.10, epsilon = 1e-9);
        assert_abs_diff_eq!(result.cagr_3y, 0.10, epsilon = 1e-9);
        assert_eq!(result.cagr_5y, 0.0);
        assert_eq!(result.cagr_10y, 0.0);
        assert!(result.seasonal_adjustment.is_none());
        assert_eq!(result.seasonality, 0.0);
        // (4/12 + 0.5) / 2
        assert_abs_diff_eq!(result.data_completeness, (4.0 / 12.0 + 0.5) / 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_empty_annual() {
        let result = analyze_historical_trends(&[], &seasonal_quarters(8));
        assert_eq!(result, TrendAnalysisResult::default());
        assert_eq!(result.trend_direction, TrendDirection::Stable);
    }

    #[test]
    fn test_declining_score_is_clamped() {
        // Steep decline: growth term -50 dominates
        let result = analyze_historical_trends(&annual(-0.30, 6), &[]);
        assert_eq!(result.trend_direction, TrendDirection::Downward);
        assert!(result.trend_score >= 0.0);
        assert!(result.trend_score < 50.0);
    }

    #[test]
    fn test_custom_score_weights() {
        let mut config = TrendConfig::default();
        config.score.completeness = 0.0;
        config.score.consistency = 0.0;
        let analyzer = HistoricalTrendAnalyzer::new(config);

        let result = analyzer.analyze(&annual(0.04, 6), &[]);
        // min(0.04 * 5, 0.5) * 100
        assert_abs_diff_eq!(result.trend_score, 20.0, epsilon = 1e-6);
        assert_eq!(analyzer.config().score.completeness, 0.0);
    }

    #[test]
    fn test_annual_volatility_and_acceleration() {
        let series = vec![
            DataPoint::new("FY24", 150.0),
            DataPoint::new("FY23", 120.0),
            DataPoint::new("FY22", 110.0),
            DataPoint::new("FY21", 100.0),
        ];
        let result = analyze_historical_trends(&series, &[]);

        assert!(result.annual_volatility > 0.0);
        // Rates 0.1, 1/11, 0.25: later half minus first rate
        let later = (120.0 / 110.0 - 1.0 + 0.25) / 2.0;
        assert_abs_diff_eq!(result.acceleration, later - 0.1, epsilon = 1e-9);
    }
}
