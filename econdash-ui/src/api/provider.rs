//! In-browser indicator provider
//!
//! Serves the shared fixed dataset after a timer-based delay. Failures can be
//! simulated per indicator through local storage:
//! `localStorage.setItem("econdash_fail", "cpi,gdp")`.

use econdash::indicators::{FetchError, FetchResult, IndicatorKey, IndicatorSnapshot};
use econdash::provider::dataset;
use gloo_timers::future::TimeoutFuture;

/// Simulated network latency
const FETCH_DELAY_MS: u32 = 300;

const FAIL_STORAGE_KEY: &str = "econdash_fail";

/// Fetch the latest snapshot for `key`
pub async fn fetch_indicator(key: IndicatorKey) -> FetchResult<IndicatorSnapshot> {
    TimeoutFuture::new(FETCH_DELAY_MS).await;

    if failing_indicators().contains(&key) {
        return Err(FetchError::Network(format!("simulated outage fetching {}", key)));
    }

    Ok(dataset::snapshot(key))
}

/// Indicators configured to fail, read from local storage
fn failing_indicators() -> Vec<IndicatorKey> {
    let raw = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(FAIL_STORAGE_KEY).ok().flatten())
        .unwrap_or_default();

    parse_key_list(&raw)
}

fn parse_key_list(raw: &str) -> Vec<IndicatorKey> {
    raw.split(',')
        .filter(|s| !s.trim().is_empty())
        .filter_map(|s| s.parse().ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_key_list() {
        assert_eq!(
            parse_key_list("cpi, fedRate,bogus"),
            vec![IndicatorKey::Cpi, IndicatorKey::FedRate]
        );
        assert!(parse_key_list("").is_empty());
    }
}
