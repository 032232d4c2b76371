//! Presentation logic
//!
//! Everything here is pure and framework-agnostic: the terminal renderer and
//! the Leptos front end both draw from these types.

pub mod card;
pub mod events;
pub mod market;
pub mod shell;
pub mod signal;
pub mod theme;
pub mod trend;

pub use card::{CardState, ChartCard, FetchTicket, Resolution};
pub use events::{upcoming_events, EconomicEvent, Importance};
pub use market::{market_snapshot, MarketQuote};
pub use shell::{Action, AppState, Watchlist};
pub use signal::{SignalIcon, SignalStyle, Tone};
pub use theme::{ThemeState, TooltipPalette};
pub use trend::{format_percent, format_updated, TrendView};
