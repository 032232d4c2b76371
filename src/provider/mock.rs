//! Mock provider
//!
//! Serves the fixed dataset after a simulated network delay.

use async_trait::async_trait;
use std::collections::HashSet;
use std::time::Duration;

use super::{dataset, IndicatorProvider};
use crate::indicators::{FetchError, FetchResult, IndicatorKey, IndicatorSnapshot};

/// Default simulated latency
pub const DEFAULT_DELAY: Duration = Duration::from_millis(300);

/// In-memory provider with a fixed delay
#[derive(Debug, Clone)]
pub struct MockProvider {
    delay: Duration,
    failing: HashSet<IndicatorKey>,
}

impl MockProvider {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            failing: HashSet::new(),
        }
    }

    /// Builder method: make fetches for `key` fail with a network error
    pub fn fail(mut self, key: IndicatorKey) -> Self {
        self.failing.insert(key);
        self
    }

    /// Builder method: make fetches for every key in `keys` fail
    pub fn fail_all(mut self, keys: impl IntoIterator<Item = IndicatorKey>) -> Self {
        self.failing.extend(keys);
        self
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY)
    }
}

#[async_trait]
impl IndicatorProvider for MockProvider {
    fn name(&self) -> &str {
        "mock"
    }

    async fn fetch(&self, key: IndicatorKey) -> FetchResult<IndicatorSnapshot> {
        tokio::time::sleep(self.delay).await;

        if self.failing.contains(&key) {
            return Err(FetchError::Network(format!(
                "simulated outage fetching {}",
                key
            )));
        }

        Ok(dataset::snapshot(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::Signal;

    #[tokio::test(start_paused = true)]
    async fn test_fetch_is_idempotent() {
        let provider = MockProvider::default();

        for key in IndicatorKey::ALL {
            let first = provider.fetch(key).await.unwrap();
            let second = provider.fetch(key).await.unwrap();
            assert_eq!(first, second);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_fetch_waits_for_delay() {
        let provider = MockProvider::new(Duration::from_millis(300));
        let started = tokio::time::Instant::now();

        let gdp = provider.fetch(IndicatorKey::Gdp).await.unwrap();

        assert!(started.elapsed() >= Duration::from_millis(300));
        assert_eq!(gdp.signal, Signal::Negative);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failing_key_reports_network_error() {
        let provider = MockProvider::default().fail(IndicatorKey::Cpi);

        let err = provider.fetch(IndicatorKey::Cpi).await.unwrap_err();
        assert!(matches!(err, FetchError::Network(_)));

        // Other keys are unaffected
        assert!(provider.fetch(IndicatorKey::Gdp).await.is_ok());
    }
}
