//! Deadline wrapper for providers

use async_trait::async_trait;
use std::time::Duration;

use super::IndicatorProvider;
use crate::indicators::{FetchError, FetchResult, IndicatorKey, IndicatorSnapshot};

/// Fails any fetch that takes longer than `limit`
pub struct TimeoutProvider<P> {
    inner: P,
    limit: Duration,
}

impl<P: IndicatorProvider> TimeoutProvider<P> {
    pub fn new(inner: P, limit: Duration) -> Self {
        Self { inner, limit }
    }
}

#[async_trait]
impl<P: IndicatorProvider> IndicatorProvider for TimeoutProvider<P> {
    fn name(&self) -> &str {
        self.inner.name()
    }

    async fn fetch(&self, key: IndicatorKey) -> FetchResult<IndicatorSnapshot> {
        match tokio::time::timeout(self.limit, self.inner.fetch(key)).await {
            Ok(result) => result,
            Err(_) => {
                tracing::warn!(indicator = %key, limit = ?self.limit, "Fetch timed out");
                Err(FetchError::Timeout(self.limit))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::MockProvider;

    #[tokio::test(start_paused = true)]
    async fn test_slow_fetch_times_out() {
        let provider = TimeoutProvider::new(
            MockProvider::new(Duration::from_secs(5)),
            Duration::from_millis(100),
        );

        let err = provider.fetch(IndicatorKey::Cpi).await.unwrap_err();
        assert_eq!(err, FetchError::Timeout(Duration::from_millis(100)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_fast_fetch_passes_through() {
        let provider = TimeoutProvider::new(
            MockProvider::new(Duration::from_millis(10)),
            Duration::from_secs(1),
        );

        let snap = provider.fetch(IndicatorKey::Unemployment).await.unwrap();
        assert_eq!(snap.latest, 4.0);
        assert_eq!(provider.name(), "mock");
    }
}
