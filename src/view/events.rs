//! Upcoming economic releases

use std::fmt;
use std::str::FromStr;

/// Market importance tier of a scheduled release
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Importance {
    Low,
    Medium,
    High,
}

impl Importance {
    /// Badge classes for light and dark themes
    pub fn badge_class(&self) -> &'static str {
        match self {
            Importance::High => "bg-red-100 text-red-800 dark:bg-red-900 dark:text-red-200",
            Importance::Medium => {
                "bg-yellow-100 text-yellow-800 dark:bg-yellow-900 dark:text-yellow-200"
            }
            Importance::Low => "bg-gray-100 text-gray-800 dark:bg-gray-700 dark:text-gray-200",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Importance::High => "high",
            Importance::Medium => "medium",
            Importance::Low => "low",
        }
    }
}

impl fmt::Display for Importance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown tiers fall to `Low`
impl FromStr for Importance {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_lowercase().as_str() {
            "high" => Importance::High,
            "medium" => Importance::Medium,
            _ => Importance::Low,
        })
    }
}

/// A scheduled data release
#[derive(Debug, Clone, PartialEq)]
pub struct EconomicEvent {
    pub date: &'static str,
    pub time: &'static str,
    pub name: &'static str,
    pub consensus: &'static str,
    pub importance: Importance,
}

impl EconomicEvent {
    /// Secondary line, e.g. `Jun 20 at 8:30 AM • Consensus: 220K`
    pub fn schedule_line(&self) -> String {
        format!("{} at {} • Consensus: {}", self.date, self.time, self.consensus)
    }
}

pub fn upcoming_events() -> Vec<EconomicEvent> {
    vec![
        EconomicEvent {
            date: "Jun 20",
            time: "8:30 AM",
            name: "Jobless Claims",
            consensus: "220K",
            importance: Importance::Medium,
        },
        EconomicEvent {
            date: "Jun 21",
            time: "10:00 AM",
            name: "Existing Home Sales",
            consensus: "4.1M",
            importance: Importance::Low,
        },
        EconomicEvent {
            date: "Jun 26",
            time: "8:30 AM",
            name: "GDP (Final)",
            consensus: "1.3%",
            importance: Importance::High,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_importance_parsing_defaults_to_low() {
        assert_eq!("HIGH".parse::<Importance>(), Ok(Importance::High));
        assert_eq!("medium".parse::<Importance>(), Ok(Importance::Medium));
        assert_eq!("urgent".parse::<Importance>(), Ok(Importance::Low));
    }

    #[test]
    fn test_each_tier_has_distinct_badge() {
        let tiers = [Importance::High, Importance::Medium, Importance::Low];
        for (i, a) in tiers.iter().enumerate() {
            for b in &tiers[i + 1..] {
                assert_ne!(a.badge_class(), b.badge_class());
            }
        }
    }

    #[test]
    fn test_schedule_line() {
        let events = upcoming_events();
        assert_eq!(events[0].schedule_line(), "Jun 20 at 8:30 AM • Consensus: 220K");
        assert_eq!(events[2].importance, Importance::High);
    }
}
