//! Indicator Data Provider
//!
//! The only external boundary of the dashboard: given an indicator key,
//! asynchronously return its latest snapshot.
//!
//! - [`dataset`]: the fixed in-memory dataset
//! - [`MockProvider`]: serves the dataset after a simulated delay
//! - [`TimeoutProvider`]: bounds any provider with a deadline

pub mod dataset;
#[cfg(feature = "runtime")]
mod mock;
#[cfg(feature = "runtime")]
mod timeout;

#[cfg(feature = "runtime")]
pub use mock::MockProvider;
#[cfg(feature = "runtime")]
pub use timeout::TimeoutProvider;

use async_trait::async_trait;
use std::sync::Arc;

use crate::indicators::{FetchResult, IndicatorKey, IndicatorSnapshot};

/// Source of indicator snapshots
#[async_trait]
pub trait IndicatorProvider: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &str;

    /// Fetch the latest snapshot for `key`
    async fn fetch(&self, key: IndicatorKey) -> FetchResult<IndicatorSnapshot>;
}

#[async_trait]
impl<P: IndicatorProvider + ?Sized> IndicatorProvider for Arc<P> {
    fn name(&self) -> &str {
        (**self).name()
    }

    async fn fetch(&self, key: IndicatorKey) -> FetchResult<IndicatorSnapshot> {
        (**self).fetch(key).await
    }
}
