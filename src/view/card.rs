//! Chart card state machine
//!
//! Each card moves `Loading -> Loaded | Failed` per fetch. Every fetch is
//! issued under a [`FetchTicket`] carrying the card's generation; a response
//! whose ticket is no longer current is discarded instead of overwriting the
//! newer request's state.

use crate::indicators::{FetchError, FetchResult, Indicator, IndicatorKey, IndicatorSnapshot};

use super::trend::TrendView;

/// What a card currently shows
#[derive(Debug, Clone, PartialEq)]
pub enum CardState {
    Loading,
    Loaded(Box<IndicatorSnapshot>),
    Failed(FetchError),
}

impl CardState {
    pub fn label(&self) -> &'static str {
        match self {
            CardState::Loading => "loading",
            CardState::Loaded(_) => "loaded",
            CardState::Failed(_) => "failed",
        }
    }
}

/// Proof of which request a response belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FetchTicket {
    key: IndicatorKey,
    generation: u64,
}

impl FetchTicket {
    pub fn key(&self) -> IndicatorKey {
        self.key
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Outcome of handing a response back to a card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The response was current and the card changed state
    Applied,
    /// A newer request superseded this one; the response was dropped
    Stale,
}

/// One indicator card
#[derive(Debug, Clone, PartialEq)]
pub struct ChartCard {
    indicator: Indicator,
    generation: u64,
    state: CardState,
}

impl ChartCard {
    /// A card starts in `Loading`; call [`ChartCard::begin_load`] to obtain its first ticket
    pub fn new(indicator: Indicator) -> Self {
        Self {
            indicator,
            generation: 0,
            state: CardState::Loading,
        }
    }

    pub fn key(&self) -> IndicatorKey {
        self.indicator.key
    }

    pub fn title(&self) -> &str {
        &self.indicator.title
    }

    pub fn state(&self) -> &CardState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, CardState::Loading)
    }

    pub fn snapshot(&self) -> Option<&IndicatorSnapshot> {
        match &self.state {
            CardState::Loaded(snapshot) => Some(snapshot),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&FetchError> {
        match &self.state {
            CardState::Failed(err) => Some(err),
            _ => None,
        }
    }

    pub fn trend(&self) -> Option<TrendView> {
        self.snapshot().map(TrendView::new)
    }

    /// Enter `Loading` and issue a ticket for the current key
    ///
    /// Any ticket issued earlier becomes stale.
    pub fn begin_load(&mut self) -> FetchTicket {
        self.generation += 1;
        self.state = CardState::Loading;

        FetchTicket {
            key: self.indicator.key,
            generation: self.generation,
        }
    }

    /// Point the card at a different indicator
    ///
    /// Returns a ticket for the new key, or `None` when the key is unchanged.
    pub fn set_indicator(&mut self, indicator: Indicator) -> Option<FetchTicket> {
        if indicator.key == self.indicator.key {
            self.indicator.title = indicator.title;
            return None;
        }

        self.indicator = indicator;
        Some(self.begin_load())
    }

    /// Apply a fetch result if `ticket` is still current
    pub fn resolve(
        &mut self,
        ticket: FetchTicket,
        result: FetchResult<IndicatorSnapshot>,
    ) -> Resolution {
        if ticket.generation != self.generation || ticket.key != self.indicator.key {
            tracing::debug!(
                indicator = %ticket.key,
                ticket = ticket.generation,
                current = self.generation,
                "Discarding stale response"
            );
            return Resolution::Stale;
        }

        self.state = match result.and_then(|snapshot| {
            snapshot.check_consistency(ticket.key)?;
            Ok(snapshot)
        }) {
            Ok(snapshot) => CardState::Loaded(Box::new(snapshot)),
            Err(err) => {
                tracing::warn!(indicator = %ticket.key, error = %err, "Indicator fetch failed");
                CardState::Failed(err)
            }
        };

        Resolution::Applied
    }
}
