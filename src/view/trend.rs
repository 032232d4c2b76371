//! Trend derivation and value formatting
//!
//! The arrow follows the raw numeric change; the color follows the snapshot's
//! `signal`. A falling CPI print is drawn with a down arrow in the affirmative
//! color when the signal says the reading is good news.

use chrono::{DateTime, Utc};

use super::signal::{SignalStyle, Tone};
use crate::indicators::{Direction, IndicatorSnapshot};

/// Minus sign used for negative deltas
pub const MINUS: char = '\u{2212}';

/// Change line shown under the headline value
#[derive(Debug, Clone, PartialEq)]
pub struct TrendView {
    pub direction: Direction,
    /// `↗`, `↘` or `→`
    pub arrow: &'static str,
    /// Signed one-decimal delta, e.g. `−0.3`
    pub delta_text: String,
    pub tone: Tone,
}

impl TrendView {
    pub fn new(snapshot: &IndicatorSnapshot) -> Self {
        let direction = snapshot.direction();

        Self {
            direction,
            arrow: arrow(direction),
            delta_text: format_delta(snapshot.change()),
            tone: SignalStyle::for_signal(&snapshot.signal).tone,
        }
    }
}

pub fn arrow(direction: Direction) -> &'static str {
    match direction {
        Direction::Up => "↗",
        Direction::Down => "↘",
        Direction::Flat => "→",
    }
}

/// One-decimal signed delta
pub fn format_delta(change: f64) -> String {
    let magnitude = format!("{:.1}", ((change * 10.0).round() / 10.0).abs());
    match Direction::from_change(change) {
        Direction::Up => format!("+{}", magnitude),
        Direction::Down => format!("{}{}", MINUS, magnitude),
        Direction::Flat => magnitude,
    }
}

/// Shortest decimal form with a percent suffix (`3%`, `5.25%`)
pub fn format_percent(value: f64) -> String {
    format!("{}%", value)
}

/// Release date as `M/D/YYYY`
pub fn format_updated(ts: &DateTime<Utc>) -> String {
    ts.format("%-m/%-d/%Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::IndicatorKey;
    use crate::provider::dataset;

    #[test]
    fn test_cpi_trend() {
        let trend = TrendView::new(&dataset::snapshot(IndicatorKey::Cpi));
        assert_eq!(trend.direction, Direction::Down);
        assert_eq!(trend.arrow, "↘");
        assert_eq!(trend.delta_text, "−0.3");
        // Positive signal drives the color even though the value fell
        assert_eq!(trend.tone, Tone::Affirmative);
    }

    #[test]
    fn test_flat_trend() {
        let trend = TrendView::new(&dataset::snapshot(IndicatorKey::FedRate));
        assert_eq!(trend.direction, Direction::Flat);
        assert_eq!(trend.arrow, "→");
        assert_eq!(trend.delta_text, "0.0");
        assert_eq!(trend.tone, Tone::Warning);
    }

    #[test]
    fn test_gdp_delta() {
        let trend = TrendView::new(&dataset::snapshot(IndicatorKey::Gdp));
        assert_eq!(trend.direction, Direction::Down);
        assert_eq!(trend.delta_text, "−1.8");
    }

    #[test]
    fn test_format_delta_sign() {
        assert_eq!(format_delta(0.26), "+0.3");
        assert_eq!(format_delta(-1.0), "−1.0");
        assert_eq!(format_delta(0.0), "0.0");
    }

    #[test]
    fn test_arrow_agrees_with_rounded_delta() {
        let mut snap = dataset::snapshot(IndicatorKey::Unemployment);
        snap.previous = 0.3;
        snap.latest = 0.1 + 0.2;
        let trend = TrendView::new(&snap);
        assert_eq!(trend.arrow, "→");
        assert_eq!(trend.delta_text, "0.0");

        assert_eq!(format_delta(-0.04), "0.0");
        assert_eq!(format_delta(0.04), "0.0");
        assert_eq!(format_delta(-0.06), "−0.1");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(3.0), "3%");
        assert_eq!(format_percent(5.25), "5.25%");
        assert_eq!(format_percent(1.6), "1.6%");
    }

    #[test]
    fn test_format_updated() {
        let snap = dataset::snapshot(IndicatorKey::Gdp);
        assert_eq!(format_updated(&snap.last_updated), "4/25/2024");
    }
}
