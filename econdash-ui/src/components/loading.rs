//! Loading Component
//!
//! Skeleton shown while a card's fetch is in flight.

use leptos::*;

/// Skeleton loader for indicator cards
#[component]
pub fn CardSkeleton() -> impl IntoView {
    view! {
        <div class="bg-white dark:bg-gray-900 rounded-2xl shadow-lg p-6 border border-gray-200 dark:border-gray-700">
            <div class="animate-pulse">
                <div class="h-4 bg-gray-300 dark:bg-gray-600 rounded mb-4" />
                <div class="h-32 bg-gray-300 dark:bg-gray-600 rounded" />
            </div>
        </div>
    }
}
