//! Fixed indicator dataset
//!
//! Stand-in for a real data source. Pure and synchronous so both the native
//! mock provider and the browser front end can serve it.

use chrono::{DateTime, Utc};

use crate::indicators::{IndicatorKey, IndicatorSnapshot, SeriesPoint, Signal};

/// Snapshot for `key`
pub fn snapshot(key: IndicatorKey) -> IndicatorSnapshot {
    match key {
        IndicatorKey::Cpi => IndicatorSnapshot {
            data: vec![
                SeriesPoint::new("Jan 2024", 3.1, 3.0),
                SeriesPoint::new("Feb 2024", 3.2, 3.1),
                SeriesPoint::new("Mar 2024", 3.5, 3.3),
                SeriesPoint::new("Apr 2024", 3.4, 3.4),
                SeriesPoint::new("May 2024", 3.3, 3.2),
                SeriesPoint::new("Jun 2024", 3.0, 3.1),
            ],
            latest: 3.0,
            previous: 3.3,
            consensus: 3.1,
            signal: Signal::Positive,
            commentary: "CPI came in below expectations at 3.0%, showing continued disinflation. \
                         This is positive for risk assets as it reduces pressure on Fed policy."
                .to_string(),
            last_updated: released("2024-06-15T08:30:00Z"),
        },
        IndicatorKey::Unemployment => IndicatorSnapshot {
            data: vec![
                SeriesPoint::new("Jan 2024", 3.7, 3.8),
                SeriesPoint::new("Feb 2024", 3.9, 3.7),
                SeriesPoint::new("Mar 2024", 3.8, 3.9),
                SeriesPoint::new("Apr 2024", 3.9, 3.8),
                SeriesPoint::new("May 2024", 4.0, 3.9),
                SeriesPoint::new("Jun 2024", 4.0, 4.0),
            ],
            latest: 4.0,
            previous: 4.0,
            consensus: 4.0,
            signal: Signal::Neutral,
            commentary: "Unemployment held steady at 4.0%, matching expectations. \
                         Labor market remains resilient but showing signs of gradual cooling."
                .to_string(),
            last_updated: released("2024-06-07T08:30:00Z"),
        },
        IndicatorKey::FedRate => IndicatorSnapshot {
            data: vec![
                SeriesPoint::new("Jan 2024", 5.25, 5.25),
                SeriesPoint::new("Mar 2024", 5.25, 5.25),
                SeriesPoint::new("May 2024", 5.25, 5.25),
                SeriesPoint::new("Jun 2024", 5.25, 5.00),
            ],
            latest: 5.25,
            previous: 5.25,
            consensus: 5.00,
            signal: Signal::Negative,
            commentary: "Fed held rates at 5.25%, above market expectations for a cut. \
                         Hawkish stance may pressure growth stocks in the near term."
                .to_string(),
            last_updated: released("2024-06-12T14:00:00Z"),
        },
        IndicatorKey::Gdp => IndicatorSnapshot {
            data: vec![
                SeriesPoint::new("Q1 2023", 2.6, 2.4),
                SeriesPoint::new("Q2 2023", 2.1, 2.3),
                SeriesPoint::new("Q3 2023", 4.9, 4.5),
                SeriesPoint::new("Q4 2023", 3.4, 3.2),
                SeriesPoint::new("Q1 2024", 1.6, 2.0),
            ],
            latest: 1.6,
            previous: 3.4,
            consensus: 2.0,
            signal: Signal::Negative,
            commentary: "Q1 GDP growth disappointed at 1.6% vs 2.0% expected. \
                         Slower growth may support case for rate cuts but weighs on cyclical stocks."
                .to_string(),
            last_updated: released("2024-04-25T08:30:00Z"),
        },
    }
}

fn released(rfc3339: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(rfc3339)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn test_every_series_ends_at_latest() {
        for key in IndicatorKey::ALL {
            let snap = snapshot(key);
            assert!(snap.check_consistency(key).is_ok(), "{} inconsistent", key);
        }
    }

    #[test]
    fn test_gdp_snapshot() {
        let gdp = snapshot(IndicatorKey::Gdp);
        assert_eq!(gdp.latest, 1.6);
        assert_eq!(gdp.previous, 3.4);
        assert_eq!(gdp.consensus, 2.0);
        assert_eq!(gdp.signal, Signal::Negative);
        assert_eq!(gdp.data.len(), 5);
        assert_eq!(gdp.data.last().map(|p| p.value), Some(1.6));
    }

    #[test]
    fn test_release_timestamps_parse() {
        let cpi = snapshot(IndicatorKey::Cpi);
        assert_eq!(cpi.last_updated.year(), 2024);
        assert_eq!(cpi.last_updated.month(), 6);
        assert_eq!(cpi.last_updated.day(), 15);
    }

    #[test]
    fn test_dataset_is_deterministic() {
        for key in IndicatorKey::ALL {
            assert_eq!(snapshot(key), snapshot(key));
        }
    }
}
