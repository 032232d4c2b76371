//! Chart Card Component
//!
//! One indicator card. Fetches on mount, shows a skeleton while loading, a
//! failed card with retry on error, and the headline value, trend, chart and
//! commentary once loaded.

use econdash::indicators::{IndicatorKey, IndicatorSnapshot};
use econdash::view::{format_percent, format_updated, CardState, Resolution, TrendView};
use leptos::*;

use crate::api;
use crate::components::{CardSkeleton, SeriesChart, SignalIndicator};
use crate::state::global::GlobalState;

const CARD_CLASS: &str = "bg-white dark:bg-gray-900 rounded-2xl shadow-lg p-6 border border-gray-200 dark:border-gray-700";

/// Indicator card bound to a slot of the global state
#[component]
pub fn ChartCard(
    /// Index into the global card list
    slot: usize,
    /// Invoked with the card's key when the star is clicked
    on_toggle_watch: Callback<IndicatorKey>,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let card = create_memo(move |_| state.card(slot));

    // Start a fetch under a fresh ticket; late answers for older tickets are dropped
    let load = move || {
        let Some(ticket) = state.app.try_update(|app| app.begin_load(slot)).flatten() else {
            return;
        };

        spawn_local(async move {
            let result = api::fetch_indicator(ticket.key()).await;
            let outcome = state
                .app
                .try_update(|app| app.resolve(slot, ticket, result));

            if outcome == Some(Resolution::Stale) {
                web_sys::console::warn_1(
                    &format!("Dropped stale response for {}", ticket.key()).into(),
                );
            }
        });
    };

    // Fetch on mount
    create_effect(move |_| load());

    move || {
        let Some(card) = card.get() else {
            return ().into_view();
        };

        match card.state().clone() {
            CardState::Loading => view! { <CardSkeleton /> }.into_view(),
            CardState::Failed(err) => view! {
                <div class=CARD_CLASS>
                    <h2 class="text-lg font-semibold text-gray-900 dark:text-white mb-4">{card.title().to_string()}</h2>
                    <div class="flex items-start gap-2 p-3 rounded-lg bg-red-50 dark:bg-red-900/30 text-red-700 dark:text-red-300">
                        <span>"✕"</span>
                        <p class="text-sm">{format!("Failed to load data: {}", err)}</p>
                    </div>
                    <button
                        on:click=move |_| load()
                        class="mt-4 text-sm font-medium text-blue-500 hover:text-blue-400"
                    >
                        "Retry"
                    </button>
                </div>
            }
            .into_view(),
            CardState::Loaded(snapshot) => view! {
                <LoadedCard
                    key=card.key()
                    title=card.title().to_string()
                    snapshot=*snapshot
                    on_toggle_watch=on_toggle_watch
                />
            }
            .into_view(),
        }
    }
}

#[component]
fn LoadedCard(
    key: IndicatorKey,
    title: String,
    snapshot: IndicatorSnapshot,
    on_toggle_watch: Callback<IndicatorKey>,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let trend = TrendView::new(&snapshot);

    view! {
        <div class=format!("{} hover:shadow-xl transition-shadow", CARD_CLASS)>
            <div class="flex items-center justify-between mb-4">
                <h2 class="text-lg font-semibold text-gray-900 dark:text-white">{title}</h2>
                <div class="flex items-center gap-2">
                    <SignalIndicator signal=snapshot.signal.clone() />
                    <button
                        on:click=move |_| on_toggle_watch.call(key)
                        class="p-1 hover:bg-gray-100 dark:hover:bg-gray-800 rounded"
                    >
                        {move || {
                            if state.is_watched(key) {
                                view! { <span class="text-yellow-500">"★"</span> }
                            } else {
                                view! { <span class="text-gray-400">"☆"</span> }
                            }
                        }}
                    </button>
                </div>
            </div>

            <div class="mb-4">
                <div class="flex items-baseline gap-2">
                    <span class="text-2xl font-bold text-gray-900 dark:text-white">
                        {format_percent(snapshot.latest)}
                    </span>
                    <span class=format!("text-sm font-medium {}", trend.tone.css_class())>
                        {format!("{} {}", trend.arrow, trend.delta_text)}
                    </span>
                </div>
                <div class="text-sm text-gray-600 dark:text-gray-400">
                    {format!(
                        "vs {} consensus • Updated {}",
                        format_percent(snapshot.consensus),
                        format_updated(&snapshot.last_updated)
                    )}
                </div>
            </div>

            <SeriesChart points=snapshot.data.clone() />

            <div class="mt-4 p-3 bg-gray-50 dark:bg-gray-800 rounded-lg">
                <p class="text-sm text-gray-700 dark:text-gray-300">{snapshot.commentary.clone()}</p>
            </div>
        </div>
    }
}
