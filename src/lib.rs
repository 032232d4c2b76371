//! # EconDashboard
//!
//! Economic indicator dashboard: CPI, unemployment, the Fed funds rate and GDP
//! as chart cards, a market snapshot strip and an upcoming-releases list, with
//! watchlist toggling and dark-mode theming.
//!
//! ## Modules
//!
//! - [`indicators`]: data model and fetch errors
//! - [`provider`]: the indicator data source contract and its mock
//! - [`view`]: card state machine, styling and shell state
//! - [`dashboard`]: async orchestration of card fetches
//! - [`render`]: plain-text rendering for terminals
//! - [`config`]: TOML + environment configuration
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use econdash::{Config, Dashboard};
//! use econdash::view::{market_snapshot, upcoming_events};
//!
//! #[tokio::main]
//! async fn main() {
//!     let dashboard = Dashboard::from_config(&Config::default());
//!     dashboard.load_all().await;
//!
//!     let state = dashboard.state().await;
//!     print!(
//!         "{}",
//!         econdash::render::render_dashboard(&state, &market_snapshot(), &upcoming_events())
//!     );
//! }
//! ```

pub mod config;
#[cfg(feature = "runtime")]
pub mod dashboard;
pub mod indicators;
pub mod provider;
pub mod render;
pub mod view;

pub use config::{Config, ConfigError, DashboardConfig, LoggingConfig, ProviderConfig};

#[cfg(feature = "runtime")]
pub use dashboard::{Dashboard, LoadSummary};

pub use indicators::{
    Direction, FetchError, FetchResult, Indicator, IndicatorKey, IndicatorSnapshot, SeriesPoint,
    Signal,
};

pub use provider::IndicatorProvider;
#[cfg(feature = "runtime")]
pub use provider::{MockProvider, TimeoutProvider};

pub use view::{
    Action, AppState, CardState, ChartCard, FetchTicket, Resolution, ThemeState, Watchlist,
};
