//! Market Snapshot Component

use econdash::view::market_snapshot;
use leptos::*;

#[component]
pub fn MarketSnapshot() -> impl IntoView {
    view! {
        <div class="bg-gradient-to-r from-blue-50 to-indigo-50 dark:from-gray-900 dark:to-gray-800 rounded-2xl p-6 mb-6 border border-blue-200 dark:border-gray-700">
            <h2 class="text-xl font-bold text-gray-900 dark:text-white mb-4">"Market Snapshot"</h2>
            <div class="grid grid-cols-3 gap-4">
                {market_snapshot()
                    .into_iter()
                    .map(|quote| view! {
                        <div class="text-center">
                            <div class="text-sm text-gray-600 dark:text-gray-400">{quote.label}</div>
                            <div class="text-lg font-semibold text-gray-900 dark:text-white">{quote.value}</div>
                            <div class=format!("text-sm font-medium {}", quote.change_class())>
                                {quote.change}
                            </div>
                        </div>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
