//! Navigation Component
//!
//! Header bar with brand and theme toggle.

use leptos::*;

use crate::state::global::GlobalState;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <nav class="bg-white dark:bg-gray-900 shadow-sm border-b border-gray-200 dark:border-gray-700">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-16">
                    <div class="flex items-center gap-3">
                        <span class="text-3xl text-blue-500">"↗"</span>
                        <h1 class="text-xl font-bold text-gray-900 dark:text-white">"EconDashboard"</h1>
                    </div>

                    <button
                        on:click=move |_| state.toggle_theme()
                        title=move || if state.is_dark() { "Switch to light mode" } else { "Switch to dark mode" }
                        class="p-2 rounded-lg hover:bg-gray-100 dark:hover:bg-gray-800 transition-colors"
                    >
                        {move || {
                            if state.is_dark() {
                                view! { <span class="text-xl text-yellow-500">"☀"</span> }
                            } else {
                                view! { <span class="text-xl text-gray-600">"☾"</span> }
                            }
                        }}
                    </button>
                </div>
            </div>
        </nav>
    }
}
