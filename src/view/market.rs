//! Market snapshot strip

use crate::indicators::Direction;

/// One headline market metric
#[derive(Debug, Clone, PartialEq)]
pub struct MarketQuote {
    pub label: &'static str,
    pub value: &'static str,
    pub change: &'static str,
    pub direction: Direction,
}

impl MarketQuote {
    /// CSS class for the change text
    pub fn change_class(&self) -> &'static str {
        match self.direction {
            Direction::Up => "text-green-500",
            Direction::Down => "text-red-500",
            Direction::Flat => "text-gray-500",
        }
    }
}

/// Quotes shown above the indicator grid
pub fn market_snapshot() -> Vec<MarketQuote> {
    vec![
        MarketQuote {
            label: "S&P 500",
            value: "5,431.60",
            change: "+0.8%",
            direction: Direction::Up,
        },
        MarketQuote {
            label: "10Y Treasury",
            value: "4.42%",
            change: "-0.05%",
            direction: Direction::Down,
        },
        MarketQuote {
            label: "VIX",
            value: "12.8",
            change: "-1.2",
            direction: Direction::Down,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_quotes() {
        let quotes = market_snapshot();
        assert_eq!(quotes.len(), 3);
        assert_eq!(quotes[0].label, "S&P 500");
        assert_eq!(quotes[0].change_class(), "text-green-500");
        assert_eq!(quotes[2].change_class(), "text-red-500");
    }
}
