//! Plain-text rendering
//!
//! Draws the dashboard for a terminal: header, market strip, one block per
//! card with sparklines for actual vs. consensus, and the release calendar.

use crate::indicators::SeriesPoint;
use crate::view::{
    format_percent, format_updated, AppState, CardState, ChartCard, EconomicEvent, MarketQuote,
    SignalStyle, ThemeState, TrendView,
};

const SPARK_LEVELS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];
const RULE_WIDTH: usize = 64;

/// Whole dashboard
pub fn render_dashboard(
    state: &AppState,
    quotes: &[MarketQuote],
    events: &[EconomicEvent],
) -> String {
    let mut out = String::new();

    out.push_str(&render_header(&state.theme()));
    out.push('\n');
    out.push_str(&render_market(quotes));
    out.push('\n');

    for card in state.cards() {
        out.push_str(&render_card(card, state.is_watched(card.key())));
        out.push('\n');
    }

    out.push_str(&render_events(events));
    out
}

pub fn render_header(theme: &ThemeState) -> String {
    let toggle = if theme.is_dark() { "☀" } else { "☾" };
    format!(
        "EconDashboard{:>width$}\n{}\n",
        format!("{} {}", theme.label(), toggle),
        "═".repeat(RULE_WIDTH),
        width = RULE_WIDTH - "EconDashboard".len()
    )
}

pub fn render_market(quotes: &[MarketQuote]) -> String {
    let mut out = String::from("Market Snapshot\n");
    out.push_str(&format!("{}\n", "-".repeat(RULE_WIDTH)));

    for quote in quotes {
        out.push_str(&format!(
            "  {:<14} {:>10}  {:>7}\n",
            quote.label, quote.value, quote.change
        ));
    }
    out
}

pub fn render_card(card: &ChartCard, watched: bool) -> String {
    let star = if watched { "★" } else { "☆" };
    let mut out = String::new();

    match card.state() {
        CardState::Loading => {
            out.push_str(&format!("{} {}\n", star, card.title()));
            out.push_str(&format!("{}\n", "-".repeat(RULE_WIDTH)));
            out.push_str("  loading…\n");
        }
        CardState::Failed(err) => {
            out.push_str(&format!("{} {}\n", star, card.title()));
            out.push_str(&format!("{}\n", "-".repeat(RULE_WIDTH)));
            out.push_str(&format!("  ✕ Failed to load: {}\n", err));
        }
        CardState::Loaded(snapshot) => {
            let style = SignalStyle::for_signal(&snapshot.signal);
            let trend = TrendView::new(snapshot);

            out.push_str(&format!(
                "{} {}  [{} {}]\n",
                star,
                card.title(),
                style.icon.glyph(),
                snapshot.signal
            ));
            out.push_str(&format!("{}\n", "-".repeat(RULE_WIDTH)));
            out.push_str(&format!(
                "  {}  {} {}\n",
                format_percent(snapshot.latest),
                trend.arrow,
                trend.delta_text
            ));
            out.push_str(&format!(
                "  vs {} consensus • Updated {}\n",
                format_percent(snapshot.consensus),
                format_updated(&snapshot.last_updated)
            ));
            out.push_str(&render_series(&snapshot.data));
            out.push_str(&format!("  {}\n", snapshot.commentary));
        }
    }

    out
}

fn render_series(points: &[SeriesPoint]) -> String {
    let actual: Vec<f64> = points.iter().map(|p| p.value).collect();
    let consensus: Vec<f64> = points.iter().map(|p| p.consensus).collect();

    let (min, max) = actual
        .iter()
        .chain(consensus.iter())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(*v), hi.max(*v))
        });

    let span = match (points.first(), points.last()) {
        (Some(first), Some(last)) => format!("{} – {}", first.period, last.period),
        _ => String::new(),
    };

    format!(
        "  actual     {}  {}\n  consensus  {}\n",
        sparkline(&actual, min, max),
        span,
        sparkline(&consensus, min, max)
    )
}

/// Block-character sparkline scaled to `[min, max]`
pub fn sparkline(values: &[f64], min: f64, max: f64) -> String {
    let range = if (max - min).abs() < f64::EPSILON {
        1.0
    } else {
        max - min
    };
    let top = (SPARK_LEVELS.len() - 1) as f64;

    values
        .iter()
        .map(|v| {
            let level = (((v - min) / range) * top).round().clamp(0.0, top) as usize;
            SPARK_LEVELS[level]
        })
        .collect()
}

pub fn render_events(events: &[EconomicEvent]) -> String {
    let mut out = String::from("Upcoming Events\n");
    out.push_str(&format!("{}\n", "-".repeat(RULE_WIDTH)));

    for event in events {
        out.push_str(&format!("  {:<22} [{}]\n", event.name, event.importance));
        out.push_str(&format!("    {}\n", event.schedule_line()));
    }
    out
}

pub fn render_theme(theme: &ThemeState) -> String {
    let mut out = format!("Theme: {}\n", theme.label());
    for (name, value) in theme.tooltip().css_variables() {
        out.push_str(&format!("  {}: {}\n", name, value));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::{FetchError, Indicator, IndicatorKey};
    use crate::provider::dataset;
    use crate::view::{market_snapshot, upcoming_events};

    fn loaded(key: IndicatorKey) -> ChartCard {
        let mut card = ChartCard::new(Indicator::new(key));
        let ticket = card.begin_load();
        card.resolve(ticket, Ok(dataset::snapshot(key)));
        card
    }

    #[test]
    fn test_loaded_card() {
        let text = render_card(&loaded(IndicatorKey::Cpi), true);
        assert!(text.starts_with("★ Consumer Price Index (CPI)  [▲ positive]"));
        assert!(text.contains("3%  ↘ −0.3"));
        assert!(text.contains("vs 3.1% consensus • Updated 6/15/2024"));
        assert!(text.contains("Jan 2024 – Jun 2024"));
    }

    #[test]
    fn test_failed_card_is_visible() {
        let mut card = ChartCard::new(Indicator::new(IndicatorKey::Gdp));
        let ticket = card.begin_load();
        card.resolve(ticket, Err(FetchError::Network("unreachable".to_string())));

        let text = render_card(&card, false);
        assert!(text.starts_with("☆ GDP Growth (QoQ)"));
        assert!(text.contains("Failed to load: Network error: unreachable"));
    }

    #[test]
    fn test_loading_card() {
        let card = ChartCard::new(Indicator::new(IndicatorKey::FedRate));
        assert!(render_card(&card, false).contains("loading…"));
    }

    #[test]
    fn test_sparkline_scaling() {
        assert_eq!(sparkline(&[0.0, 7.0], 0.0, 7.0), "▁█");
        assert_eq!(sparkline(&[5.25, 5.25], 5.25, 5.25), "▁▁");
    }

    #[test]
    fn test_dashboard_sections() {
        let state = AppState::default();
        let text = render_dashboard(&state, &market_snapshot(), &upcoming_events());
        assert!(text.starts_with("EconDashboard"));
        assert!(text.contains("Market Snapshot"));
        assert!(text.contains("S&P 500"));
        assert!(text.contains("GDP (Final)"));
        assert_eq!(text.matches("loading…").count(), 4);
    }

    #[test]
    fn test_theme_listing() {
        let text = render_theme(&ThemeState::new(true));
        assert!(text.contains("Theme: dark"));
        assert!(text.contains("--tooltip-bg: #374151"));
    }
}
