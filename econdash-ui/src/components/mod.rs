//! UI Components
//!
//! Leptos components for the dashboard.

pub mod chart;
pub mod chart_card;
pub mod loading;
pub mod market_snapshot;
pub mod nav;
pub mod signal_indicator;
pub mod upcoming_events;

pub use chart::SeriesChart;
pub use chart_card::ChartCard;
pub use loading::CardSkeleton;
pub use market_snapshot::MarketSnapshot;
pub use nav::Nav;
pub use signal_indicator::SignalIndicator;
pub use upcoming_events::UpcomingEvents;
