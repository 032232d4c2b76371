//! Indicator error types
//!
//! Defines the failures a data provider can surface to a chart card.

use std::time::Duration;
use thiserror::Error;

use super::IndicatorKey;

/// Errors that can occur while fetching an indicator snapshot
///
/// A fetch failure is contained to the card that issued it.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    /// Transport-level failure talking to the data source
    #[error("Network error: {0}")]
    Network(String),

    /// The data source did not answer in time
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// The data source has no series for this indicator
    #[error("No data for indicator: {0}")]
    NotFound(IndicatorKey),

    /// The data source answered with a snapshot that breaks its own invariants
    #[error("Malformed snapshot for {key}: {reason}")]
    Malformed { key: IndicatorKey, reason: String },
}

/// Result type alias for provider operations
pub type FetchResult<T> = Result<T, FetchError>;

/// Returned when a string does not name a known indicator
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown indicator: {0}. Use one of: cpi, unemployment, fedRate, gdp")]
pub struct ParseKeyError(pub String);
