//! Indicator data access
//!
//! Browser counterpart of the native mock provider.

mod provider;

pub use provider::fetch_indicator;
