//! Application shell state
//!
//! Owns the theme, the watchlist and the card slots. Mutated only through
//! [`AppState::dispatch`] and the card methods below, never through globals.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::indicators::{FetchResult, Indicator, IndicatorKey, IndicatorSnapshot};

use super::card::{ChartCard, FetchTicket, Resolution};
use super::theme::{ThemeState, TooltipPalette};

/// User-curated set of watched indicators
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Watchlist(BTreeSet<IndicatorKey>);

impl Watchlist {
    pub fn new(keys: impl IntoIterator<Item = IndicatorKey>) -> Self {
        Self(keys.into_iter().collect())
    }

    /// Add `key` if absent, remove it if present; returns the new membership
    pub fn toggle(&mut self, key: IndicatorKey) -> bool {
        if self.0.remove(&key) {
            false
        } else {
            self.0.insert(key);
            true
        }
    }

    pub fn contains(&self, key: IndicatorKey) -> bool {
        self.0.contains(&key)
    }
}

/// User-triggered state changes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    ToggleTheme,
    ToggleWatch(IndicatorKey),
}

/// Global dashboard state
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    theme: ThemeState,
    watchlist: Watchlist,
    cards: Vec<ChartCard>,
}

impl AppState {
    pub fn new(indicators: Vec<Indicator>, theme: ThemeState, watchlist: Watchlist) -> Self {
        Self {
            theme,
            watchlist,
            cards: indicators.into_iter().map(ChartCard::new).collect(),
        }
    }

    pub fn theme(&self) -> ThemeState {
        self.theme
    }

    pub fn tooltip(&self) -> TooltipPalette {
        self.theme.tooltip()
    }

    pub fn watchlist(&self) -> &Watchlist {
        &self.watchlist
    }

    pub fn is_watched(&self, key: IndicatorKey) -> bool {
        self.watchlist.contains(key)
    }

    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::ToggleTheme => {
                let palette = self.theme.toggle();
                tracing::debug!(
                    theme = self.theme.label(),
                    tooltip_bg = palette.background,
                    "Theme toggled"
                );
            }
            Action::ToggleWatch(key) => {
                let watched = self.watchlist.toggle(key);
                tracing::debug!(indicator = %key, watched, "Watchlist toggled");
            }
        }
    }

    pub fn cards(&self) -> &[ChartCard] {
        &self.cards
    }

    pub fn card(&self, slot: usize) -> Option<&ChartCard> {
        self.cards.get(slot)
    }

    /// Put every card into `Loading` and return one ticket per slot
    pub fn begin_all(&mut self) -> Vec<(usize, FetchTicket)> {
        self.cards
            .iter_mut()
            .enumerate()
            .map(|(slot, card)| (slot, card.begin_load()))
            .collect()
    }

    pub fn begin_load(&mut self, slot: usize) -> Option<FetchTicket> {
        self.cards.get_mut(slot).map(ChartCard::begin_load)
    }

    /// Point a card slot at another indicator; `None` if the slot is unknown or unchanged
    pub fn select_indicator(&mut self, slot: usize, key: IndicatorKey) -> Option<FetchTicket> {
        self.cards
            .get_mut(slot)
            .and_then(|card| card.set_indicator(Indicator::new(key)))
    }

    pub fn resolve(
        &mut self,
        slot: usize,
        ticket: FetchTicket,
        result: FetchResult<IndicatorSnapshot>,
    ) -> Resolution {
        match self.cards.get_mut(slot) {
            Some(card) => card.resolve(ticket, result),
            None => Resolution::Stale,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(
            Indicator::defaults(),
            ThemeState::default(),
            Watchlist::new([IndicatorKey::Cpi, IndicatorKey::Unemployment]),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::FetchError;
    use crate::provider::dataset;

    #[test]
    fn test_default_state() {
        let state = AppState::default();
        assert_eq!(state.cards().len(), 4);
        assert!(state.is_watched(IndicatorKey::Cpi));
        assert!(state.is_watched(IndicatorKey::Unemployment));
        assert!(!state.is_watched(IndicatorKey::Gdp));
        assert!(!state.theme().is_dark());
    }

    #[test]
    fn test_watch_toggle_twice_restores_membership() {
        let mut state = AppState::default();

        for key in IndicatorKey::ALL {
            let before = state.watchlist().clone();
            state.dispatch(Action::ToggleWatch(key));
            assert_ne!(state.watchlist(), &before);
            state.dispatch(Action::ToggleWatch(key));
            assert_eq!(state.watchlist(), &before);
        }
    }

    #[test]
    fn test_theme_toggle_only_touches_theme() {
        let mut state = AppState::default();
        let watchlist = state.watchlist().clone();

        state.dispatch(Action::ToggleTheme);
        assert!(state.theme().is_dark());
        assert_eq!(state.tooltip(), TooltipPalette::DARK);
        assert_eq!(state.watchlist(), &watchlist);

        state.dispatch(Action::ToggleTheme);
        assert_eq!(state.tooltip(), TooltipPalette::LIGHT);
    }

    #[test]
    fn test_card_failure_is_contained() {
        let mut state = AppState::default();
        let tickets = state.begin_all();

        for (slot, ticket) in tickets {
            let result = if ticket.key() == IndicatorKey::FedRate {
                Err(FetchError::Network("down".to_string()))
            } else {
                Ok(dataset::snapshot(ticket.key()))
            };
            state.resolve(slot, ticket, result);
        }

        let labels: Vec<_> = state.cards().iter().map(|c| c.state().label()).collect();
        assert_eq!(labels, vec!["loaded", "loaded", "failed", "loaded"]);
    }

    #[test]
    fn test_select_indicator_reloads_slot() {
        let mut state = AppState::default();
        let tickets = state.begin_all();
        let (slot, ticket) = tickets[0];
        state.resolve(slot, ticket, Ok(dataset::snapshot(IndicatorKey::Cpi)));

        let ticket = state.select_indicator(0, IndicatorKey::Gdp).unwrap();
        assert!(state.card(0).unwrap().is_loading());
        assert_eq!(ticket.key(), IndicatorKey::Gdp);
        assert!(state.select_indicator(0, IndicatorKey::Gdp).is_none());
        assert!(state.select_indicator(9, IndicatorKey::Gdp).is_none());
    }
}
