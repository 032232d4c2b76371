//! Dashboard orchestration
//!
//! Couples the shared [`AppState`] with an [`IndicatorProvider`]. Every card
//! fetch runs independently; results are routed back through the card's
//! ticket so a slow response for an old key never overwrites a newer one.

use futures_util::future::join_all;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

use crate::config::Config;
use crate::indicators::IndicatorKey;
use crate::provider::{IndicatorProvider, MockProvider, TimeoutProvider};
use crate::view::{Action, AppState, FetchTicket, Resolution};

/// Outcome counts of a full refresh
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSummary {
    pub loaded: usize,
    pub failed: usize,
    pub stale: usize,
}

/// Shared handle to the running dashboard
#[derive(Clone)]
pub struct Dashboard {
    provider: Arc<dyn IndicatorProvider>,
    state: Arc<RwLock<AppState>>,
}

impl Dashboard {
    pub fn new(provider: Arc<dyn IndicatorProvider>, state: AppState) -> Self {
        Self {
            provider,
            state: Arc::new(RwLock::new(state)),
        }
    }

    /// Build the provider and initial state described by `config`
    pub fn from_config(config: &Config) -> Self {
        let mock = MockProvider::new(Duration::from_millis(config.provider.delay_ms))
            .fail_all(config.provider.fail.iter().copied());

        let provider: Arc<dyn IndicatorProvider> = match config.provider.timeout_ms {
            Some(ms) => Arc::new(TimeoutProvider::new(mock, Duration::from_millis(ms))),
            None => Arc::new(mock),
        };

        Self::new(provider, config.dashboard.initial_state())
    }

    /// Copy of the current state for rendering
    pub async fn state(&self) -> AppState {
        self.state.read().await.clone()
    }

    pub async fn dispatch(&self, action: Action) {
        self.state.write().await.dispatch(action);
    }

    /// Reload every card concurrently
    pub async fn load_all(&self) -> LoadSummary {
        let tickets = self.state.write().await.begin_all();
        tracing::info!(
            cards = tickets.len(),
            provider = self.provider.name(),
            "Loading indicator cards"
        );

        let outcomes = join_all(
            tickets
                .into_iter()
                .map(|(slot, ticket)| self.run(slot, ticket)),
        )
        .await;

        let mut summary = LoadSummary::default();
        let state = self.state.read().await;
        for (slot, outcome) in outcomes {
            match outcome {
                Resolution::Stale => summary.stale += 1,
                Resolution::Applied => match state.card(slot).and_then(|c| c.error()) {
                    Some(_) => summary.failed += 1,
                    None => summary.loaded += 1,
                },
            }
        }

        tracing::info!(
            loaded = summary.loaded,
            failed = summary.failed,
            stale = summary.stale,
            "Indicator cards settled"
        );
        summary
    }

    /// Reload one card slot; `None` if the slot does not exist
    pub async fn load_slot(&self, slot: usize) -> Option<Resolution> {
        let ticket = self.state.write().await.begin_load(slot)?;
        Some(self.run(slot, ticket).await.1)
    }

    /// Switch a card slot to `key` and load it
    ///
    /// `None` if the slot does not exist or already shows `key`.
    pub async fn select_indicator(&self, slot: usize, key: IndicatorKey) -> Option<Resolution> {
        let ticket = self.state.write().await.select_indicator(slot, key)?;
        Some(self.run(slot, ticket).await.1)
    }

    async fn run(&self, slot: usize, ticket: FetchTicket) -> (usize, Resolution) {
        tracing::debug!(
            slot,
            indicator = %ticket.key(),
            generation = ticket.generation(),
            "Fetching"
        );

        // No lock is held across the fetch
        let result = self.provider.fetch(ticket.key()).await;

        let resolution = self.state.write().await.resolve(slot, ticket, result);
        if resolution == Resolution::Stale {
            tracing::warn!(
                slot,
                indicator = %ticket.key(),
                "Dropped response for superseded request"
            );
        }

        (slot, resolution)
    }
}
