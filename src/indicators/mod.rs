//! Indicator data model
//!
//! Core types shared by the provider, the view layer and both front ends:
//! - `IndicatorKey` / `Indicator`: which macroeconomic series a card shows
//! - `IndicatorSnapshot`: latest reading plus its history
//! - `Signal`: qualitative market-relevance tag
//! - `FetchError`: everything that can go wrong loading a snapshot

mod error;
mod types;

pub use error::{FetchError, FetchResult, ParseKeyError};
pub use types::{Direction, Indicator, IndicatorKey, IndicatorSnapshot, SeriesPoint, Signal};
