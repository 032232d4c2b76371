//! App Root Component
//!
//! Main application component: global state, theme side effects and layout.

use econdash::indicators::IndicatorKey;
use leptos::*;

use crate::components::{ChartCard, MarketSnapshot, Nav, UpcomingEvents};
use crate::state::global::{apply_theme, provide_global_state, GlobalState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_global_state();
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    // Keep the document root in sync with the theme
    create_effect(move |_| apply_theme(state.theme()));

    let toggle_watch = Callback::new(move |key: IndicatorKey| state.toggle_watch(key));

    view! {
        <div class="min-h-screen bg-gray-50 dark:bg-black transition-colors">
            <Nav />

            <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                <MarketSnapshot />

                // Economic indicators grid
                <div class="grid grid-cols-1 lg:grid-cols-2 xl:grid-cols-3 gap-6 mb-8">
                    {(0..state.card_count())
                        .map(|slot| view! { <ChartCard slot=slot on_toggle_watch=toggle_watch /> })
                        .collect_view()}
                </div>

                <div class="max-w-md">
                    <UpcomingEvents />
                </div>
            </main>
        </div>
    }
}
