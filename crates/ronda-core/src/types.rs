//! Period value series types.
//!
//! This module defines the single-metric observation used by every trend
//! calculator ([`DataPoint`]), the structured calendar [`Quarter`], and the
//! per-quarter mapping [`QuarterValues`].

use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use chrono::{Datelike, Month, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::RondaError;

/// Calendar quarter of an observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Quarter {
    /// January to March.
    Q1,
    /// April to June.
    Q2,
    /// July to September.
    Q3,
    /// October to December.
    Q4,
}

impl Quarter {
    /// All quarters in calendar order.
    pub const ALL: [Self; 4] = [Self::Q1, Self::Q2, Self::Q3, Self::Q4];

    /// Quarter containing the given month (1-12).
    #[must_use]
    pub const fn from_month(month: u32) -> Option<Self> {
        match month {
            1..=3 => Some(Self::Q1),
            4..=6 => Some(Self::Q2),
            7..=9 => Some(Self::Q3),
            10..=12 => Some(Self::Q4),
            _ => None,
        }
    }

    /// Quarter whose last month is `month`. Other months yield `None`.
    #[must_use]
    pub const fn from_quarter_end_month(month: u32) -> Option<Self> {
        match month {
            3 => Some(Self::Q1),
            6 => Some(Self::Q2),
            9 => Some(Self::Q3),
            12 => Some(Self::Q4),
            _ => None,
        }
    }

    /// Quarter containing the given date.
    #[must_use]
    pub fn from_date(date: NaiveDate) -> Self {
        match date.month() {
            1..=3 => Self::Q1,
            4..=6 => Self::Q2,
            7..=9 => Self::Q3,
            _ => Self::Q4,
        }
    }

    /// Infer the quarter from a period label such as `"Mar 2024"` or `"Dec-23"`.
    ///
    /// The label is split into alphabetic runs and each run is matched against
    /// month names (`"Mar"`, `"March"`, case-insensitive). Only quarter-end
    /// months count: `Mar → Q1`, `Jun → Q2`, `Sep → Q3`, `Dec → Q4`. Labels
    /// without such a token (for example `"Q4 FY24"`) return `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ronda_core::Quarter;
    ///
    /// assert_eq!(Quarter::from_label("Jun 2023"), Some(Quarter::Q2));
    /// assert_eq!(Quarter::from_label("Sep'22"), Some(Quarter::Q3));
    /// assert_eq!(Quarter::from_label("FY2024"), None);
    /// ```
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        label
            .split(|c: char| !c.is_ascii_alphabetic())
            .filter(|run| run.len() >= 3)
            .filter_map(|run| Month::from_str(run).ok())
            .find_map(|month| Self::from_quarter_end_month(month.number_from_month()))
    }

    /// Zero-based position of the quarter within the year.
    #[must_use]
    pub const fn index(&self) -> usize {
        match self {
            Self::Q1 => 0,
            Self::Q2 => 1,
            Self::Q3 => 2,
            Self::Q4 => 3,
        }
    }

    /// Label used in reports and serialized mappings.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Q1 => "Q1",
            Self::Q2 => "Q2",
            Self::Q3 => "Q3",
            Self::Q4 => "Q4",
        }
    }
}

impl fmt::Display for Quarter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Quarter {
    type Err = RondaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "Q1" => Ok(Self::Q1),
            "Q2" => Ok(Self::Q2),
            "Q3" => Ok(Self::Q3),
            "Q4" => Ok(Self::Q4),
            _ => Err(RondaError::InvalidPeriod(format!(
                "expected Q1, Q2, Q3 or Q4, got '{}'",
                s
            ))),
        }
    }
}

/// One value per calendar quarter.
///
/// Used for per-quarter averages and seasonal indices. Serializes as
/// `{"Q1": .., "Q2": .., "Q3": .., "Q4": ..}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct QuarterValues<T> {
    /// Value for Q1.
    #[serde(rename = "Q1")]
    pub q1: T,
    /// Value for Q2.
    #[serde(rename = "Q2")]
    pub q2: T,
    /// Value for Q3.
    #[serde(rename = "Q3")]
    pub q3: T,
    /// Value for Q4.
    #[serde(rename = "Q4")]
    pub q4: T,
}

impl<T> QuarterValues<T> {
    /// Create a mapping from explicit values.
    pub const fn new(q1: T, q2: T, q3: T, q4: T) -> Self {
        Self { q1, q2, q3, q4 }
    }

    /// Build a mapping by evaluating `f` for each quarter.
    pub fn from_fn(mut f: impl FnMut(Quarter) -> T) -> Self {
        Self {
            q1: f(Quarter::Q1),
            q2: f(Quarter::Q2),
            q3: f(Quarter::Q3),
            q4: f(Quarter::Q4),
        }
    }

    /// Value for the given quarter.
    pub const fn get(&self, quarter: Quarter) -> &T {
        match quarter {
            Quarter::Q1 => &self.q1,
            Quarter::Q2 => &self.q2,
            Quarter::Q3 => &self.q3,
            Quarter::Q4 => &self.q4,
        }
    }

    /// Iterate over `(quarter, value)` pairs in calendar order.
    pub fn iter(&self) -> impl Iterator<Item = (Quarter, &T)> {
        Quarter::ALL.into_iter().map(move |q| (q, self.get(q)))
    }
}

impl<T: Copy> QuarterValues<T> {
    /// The same value for every quarter.
    pub const fn splat(value: T) -> Self {
        Self::new(value, value, value, value)
    }

    /// Values in calendar order.
    pub const fn to_array(&self) -> [T; 4] {
        [self.q1, self.q2, self.q3, self.q4]
    }
}

impl QuarterValues<f64> {
    /// Sum of the four values.
    #[must_use]
    pub fn sum(&self) -> f64 {
        self.q1 + self.q2 + self.q3 + self.q4
    }
}

impl<T> Index<Quarter> for QuarterValues<T> {
    type Output = T;

    fn index(&self, quarter: Quarter) -> &T {
        self.get(quarter)
    }
}

impl<T> IndexMut<Quarter> for QuarterValues<T> {
    fn index_mut(&mut self, quarter: Quarter) -> &mut T {
        match quarter {
            Quarter::Q1 => &mut self.q1,
            Quarter::Q2 => &mut self.q2,
            Quarter::Q3 => &mut self.q3,
            Quarter::Q4 => &mut self.q4,
        }
    }
}

/// A single observation of one financial metric.
///
/// Series of data points are ordered most-recent-first. The calendar quarter
/// is normally decided by the loader and stored in `quarter`; when it is
/// absent, [`DataPoint::calendar_quarter`] falls back to parsing the label.
///
/// # Example
///
/// ```
/// use ronda_core::{DataPoint, Quarter};
///
/// let point = DataPoint::new("Dec 2024", 963.0);
/// assert_eq!(point.calendar_quarter(), Some(Quarter::Q4));
///
/// let fiscal = DataPoint::new("Q3 FY25", 963.0).with_quarter(Quarter::Q4);
/// assert_eq!(fiscal.calendar_quarter(), Some(Quarter::Q4));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    /// Human-readable period label.
    pub period: String,
    /// Observed value. `null` in serialized input is read as `0.0`.
    #[serde(default, deserialize_with = "null_as_zero")]
    pub value: f64,
    /// Structured calendar quarter, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quarter: Option<Quarter>,
}

impl DataPoint {
    /// Create a data point whose quarter is inferred from its label.
    #[must_use]
    pub fn new(period: impl Into<String>, value: f64) -> Self {
        Self {
            period: period.into(),
            value,
            quarter: None,
        }
    }

    /// Sets the structured calendar quarter.
    #[must_use]
    pub fn with_quarter(mut self, quarter: Quarter) -> Self {
        self.quarter = Some(quarter);
        self
    }

    /// Calendar quarter of this point: the explicit quarter if set, else the
    /// quarter parsed from the period label.
    #[must_use]
    pub fn calendar_quarter(&self) -> Option<Quarter> {
        self.quarter.or_else(|| Quarter::from_label(&self.period))
    }
}

fn null_as_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quarter_from_label_tokens() {
        assert_eq!(Quarter::from_label("Mar 2024"), Some(Quarter::Q1));
        assert_eq!(Quarter::from_label("Jun-23"), Some(Quarter::Q2));
        assert_eq!(Quarter::from_label("September 2021"), Some(Quarter::Q3));
        assert_eq!(Quarter::from_label("dec2020"), Some(Quarter::Q4));
    }

    #[test]
    fn test_quarter_from_label_unrecognized() {
        assert_eq!(Quarter::from_label("Q4 FY24"), None);
        assert_eq!(Quarter::from_label("Jan 2024"), None);
        assert_eq!(Quarter::from_label("Market 2024"), None);
        assert_eq!(Quarter::from_label(""), None);
    }

    #[test]
    fn test_quarter_from_month_and_date() {
        assert_eq!(Quarter::from_month(2), Some(Quarter::Q1));
        assert_eq!(Quarter::from_month(11), Some(Quarter::Q4));
        assert_eq!(Quarter::from_month(13), None);

        let date = NaiveDate::from_ymd_opt(2024, 9, 30).unwrap();
        assert_eq!(Quarter::from_date(date), Quarter::Q3);
    }

    #[test]
    fn test_quarter_parse() {
        assert_eq!("q2".parse::<Quarter>().unwrap(), Quarter::Q2);
        assert_eq!(" Q4 ".parse::<Quarter>().unwrap(), Quarter::Q4);
        assert!(matches!(
            "Q5".parse::<Quarter>(),
            Err(RondaError::InvalidPeriod(_))
        ));
    }

    #[test]
    fn test_quarter_values_indexing() {
        let mut values = QuarterValues::splat(1.0);
        values[Quarter::Q3] = 2.5;
        assert_eq!(values[Quarter::Q3], 2.5);
        assert_eq!(values.sum(), 5.5);
        assert_eq!(values.to_array(), [1.0, 1.0, 2.5, 1.0]);

        let labels: Vec<String> = values.iter().map(|(q, _)| q.to_string()).collect();
        assert_eq!(labels, vec!["Q1", "Q2", "Q3", "Q4"]);
    }

    #[test]
    fn test_quarter_values_serde_keys() {
        let values = QuarterValues::new(1.0, 2.0, 3.0, 4.0);
        let json = serde_json::to_string(&values).unwrap();
        assert_eq!(json, r#"{"Q1":1.0,"Q2":2.0,"Q3":3.0,"Q4":4.0}"#);
    }

    #[test]
    fn test_data_point_quarter_precedence() {
        let inferred = DataPoint::new("Mar 2024", 10.0);
        assert_eq!(inferred.calendar_quarter(), Some(Quarter::Q1));

        let explicit = DataPoint::new("Mar 2024", 10.0).with_quarter(Quarter::Q4);
        assert_eq!(explicit.calendar_quarter(), Some(Quarter::Q4));
    }

    #[test]
    fn test_data_point_null_value() {
        let point: DataPoint = serde_json::from_str(r#"{"period":"Jun 2024","value":null}"#).unwrap();
        assert_eq!(point.value, 0.0);

        let point: DataPoint = serde_json::from_str(r#"{"period":"Jun 2024"}"#).unwrap();
        assert_eq!(point.value, 0.0);
        assert_eq!(point.quarter, None);

        let point: DataPoint =
            serde_json::from_str(r#"{"period":"FY24","value":5.0,"quarter":"Q2"}"#).unwrap();
        assert_eq!(point.calendar_quarter(), Some(Quarter::Q2));
    }
}
