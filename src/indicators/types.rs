//! Core data types for economic indicators
//!
//! - `IndicatorKey`: identifier of one of the fixed macro series
//! - `Indicator`: key plus display title
//! - `SeriesPoint`: one period of actual vs. consensus
//! - `IndicatorSnapshot`: latest reading, history and commentary
//! - `Signal`: qualitative tag for the latest reading

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::{FetchError, ParseKeyError};

/// Identifier of a macroeconomic series
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "camelCase")]
pub enum IndicatorKey {
    /// Consumer Price Index, year-over-year
    Cpi,
    /// Headline unemployment rate
    Unemployment,
    /// Federal funds target rate
    FedRate,
    /// Real GDP growth, quarter-over-quarter annualized
    Gdp,
}

impl IndicatorKey {
    /// All keys in dashboard order
    pub const ALL: [IndicatorKey; 4] = [
        IndicatorKey::Cpi,
        IndicatorKey::Unemployment,
        IndicatorKey::FedRate,
        IndicatorKey::Gdp,
    ];

    /// Wire identifier (`cpi`, `unemployment`, `fedRate`, `gdp`)
    pub fn as_str(&self) -> &'static str {
        match self {
            IndicatorKey::Cpi => "cpi",
            IndicatorKey::Unemployment => "unemployment",
            IndicatorKey::FedRate => "fedRate",
            IndicatorKey::Gdp => "gdp",
        }
    }

    /// Display title used on the card header
    pub fn title(&self) -> &'static str {
        match self {
            IndicatorKey::Cpi => "Consumer Price Index (CPI)",
            IndicatorKey::Unemployment => "Unemployment Rate",
            IndicatorKey::FedRate => "Federal Funds Rate",
            IndicatorKey::Gdp => "GDP Growth (QoQ)",
        }
    }
}

impl fmt::Display for IndicatorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IndicatorKey {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cpi" => Ok(IndicatorKey::Cpi),
            "unemployment" => Ok(IndicatorKey::Unemployment),
            "fedrate" | "fed-rate" | "fed_rate" => Ok(IndicatorKey::FedRate),
            "gdp" => Ok(IndicatorKey::Gdp),
            _ => Err(ParseKeyError(s.to_string())),
        }
    }
}

/// An indicator as shown on the dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Indicator {
    pub key: IndicatorKey,
    pub title: String,
}

impl Indicator {
    /// Create an indicator with its standard title
    pub fn new(key: IndicatorKey) -> Self {
        Self {
            key,
            title: key.title().to_string(),
        }
    }

    /// Builder method: override the display title
    pub fn titled(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// The four cards the dashboard shows by default
    pub fn defaults() -> Vec<Indicator> {
        IndicatorKey::ALL.iter().copied().map(Indicator::new).collect()
    }
}

/// One period of an indicator series
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SeriesPoint {
    /// Period label, e.g. "Jan 2024" or "Q1 2024"
    #[serde(rename = "date")]
    pub period: String,
    /// Actual released value
    pub value: f64,
    /// Market consensus for the period
    pub consensus: f64,
}

impl SeriesPoint {
    pub fn new(period: impl Into<String>, value: f64, consensus: f64) -> Self {
        Self {
            period: period.into(),
            value,
            consensus,
        }
    }
}

/// Qualitative market-relevance tag for the latest reading
///
/// Any string deserializes: unknown tags are kept verbatim as `Unrecognized`
/// and render with the neutral treatment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Signal {
    Positive,
    Negative,
    Neutral,
    Unrecognized(String),
}

impl Signal {
    /// Label shown next to the signal icon
    pub fn label(&self) -> &str {
        match self {
            Signal::Positive => "positive",
            Signal::Negative => "negative",
            Signal::Neutral => "neutral",
            Signal::Unrecognized(raw) => raw,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Signal::Unrecognized(_))
    }
}

impl From<&str> for Signal {
    fn from(s: &str) -> Self {
        match s {
            "positive" => Signal::Positive,
            "negative" => Signal::Negative,
            "neutral" => Signal::Neutral,
            other => Signal::Unrecognized(other.to_string()),
        }
    }
}

impl From<String> for Signal {
    fn from(s: String) -> Self {
        Signal::from(s.as_str())
    }
}

impl From<Signal> for String {
    fn from(signal: Signal) -> Self {
        match signal {
            Signal::Unrecognized(raw) => raw,
            known => known.label().to_string(),
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Sign of `latest - previous` at display precision (one decimal)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Flat,
}

impl Direction {
    /// Changes that round to `0.0` are flat
    pub fn from_change(change: f64) -> Self {
        let tenths = (change * 10.0).round();
        if tenths > 0.0 {
            Direction::Up
        } else if tenths < 0.0 {
            Direction::Down
        } else {
            Direction::Flat
        }
    }
}

/// Latest state of one indicator
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IndicatorSnapshot {
    /// History in chronological order
    pub data: Vec<SeriesPoint>,
    pub latest: f64,
    pub previous: f64,
    pub consensus: f64,
    pub signal: Signal,
    pub commentary: String,
    pub last_updated: DateTime<Utc>,
}

impl IndicatorSnapshot {
    /// `latest - previous`
    pub fn change(&self) -> f64 {
        self.latest - self.previous
    }

    pub fn direction(&self) -> Direction {
        Direction::from_change(self.change())
    }

    /// Verify the series ends at the latest reading
    pub fn check_consistency(&self, key: IndicatorKey) -> Result<(), FetchError> {
        let last = self.data.last().ok_or_else(|| FetchError::Malformed {
            key,
            reason: "empty series".to_string(),
        })?;

        if last.value != self.latest {
            return Err(FetchError::Malformed {
                key,
                reason: format!(
                    "series ends at {} but latest is {}",
                    last.value, self.latest
                ),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(latest: f64, previous: f64) -> IndicatorSnapshot {
        IndicatorSnapshot {
            data: vec![
                SeriesPoint::new("Jan 2024", previous, previous),
                SeriesPoint::new("Feb 2024", latest, latest),
            ],
            latest,
            previous,
            consensus: latest,
            signal: Signal::Neutral,
            commentary: String::new(),
            last_updated: Utc::now(),
        }
    }

    #[test]
    fn test_key_round_trips_wire_names() {
        for key in IndicatorKey::ALL {
            assert_eq!(key.as_str().parse::<IndicatorKey>().unwrap(), key);
        }
        assert_eq!("fed-rate".parse::<IndicatorKey>().unwrap(), IndicatorKey::FedRate);
        assert_eq!(" GDP ".parse::<IndicatorKey>().unwrap(), IndicatorKey::Gdp);
        assert!("ppi".parse::<IndicatorKey>().is_err());
    }

    #[test]
    fn test_key_serializes_camel_case() {
        let json = serde_json::to_string(&IndicatorKey::FedRate).unwrap();
        assert_eq!(json, "\"fedRate\"");
    }

    #[test]
    fn test_default_indicators() {
        let indicators = Indicator::defaults();
        assert_eq!(indicators.len(), 4);
        assert_eq!(indicators[0].title, "Consumer Price Index (CPI)");
        assert_eq!(indicators[3].key, IndicatorKey::Gdp);
    }

    #[test]
    fn test_unknown_signal_is_kept_verbatim() {
        let signal: Signal = serde_json::from_str("\"bullish\"").unwrap();
        assert_eq!(signal, Signal::Unrecognized("bullish".to_string()));
        assert_eq!(signal.label(), "bullish");
        assert!(!signal.is_recognized());

        let json = serde_json::to_string(&Signal::Negative).unwrap();
        assert_eq!(json, "\"negative\"");
    }

    #[test]
    fn test_direction_is_sign_of_change() {
        assert_eq!(snapshot(3.0, 3.3).direction(), Direction::Down);
        assert_eq!(snapshot(4.9, 2.1).direction(), Direction::Up);
        assert_eq!(snapshot(5.25, 5.25).direction(), Direction::Flat);
        assert_eq!(snapshot(0.1 + 0.2, 0.3).direction(), Direction::Flat);
        assert_eq!(snapshot(2.96, 3.0).direction(), Direction::Flat);
    }

    #[test]
    fn test_consistency_check() {
        let mut snap = snapshot(3.0, 3.3);
        assert!(snap.check_consistency(IndicatorKey::Cpi).is_ok());

        snap.latest = 2.9;
        assert!(matches!(
            snap.check_consistency(IndicatorKey::Cpi),
            Err(FetchError::Malformed { .. })
        ));

        snap.data.clear();
        assert!(snap.check_consistency(IndicatorKey::Cpi).is_err());
    }

    #[test]
    fn test_snapshot_json_field_names() {
        let json = serde_json::to_value(snapshot(1.0, 2.0)).unwrap();
        assert!(json.get("lastUpdated").is_some());
        assert!(json["data"][0].get("date").is_some());
    }
}
