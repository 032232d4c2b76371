//! Upcoming Events Component
//!
//! Scheduled releases with an importance badge per tier.

use econdash::view::upcoming_events;
use leptos::*;

#[component]
pub fn UpcomingEvents() -> impl IntoView {
    view! {
        <div class="bg-white dark:bg-gray-900 rounded-2xl shadow-lg p-6 border border-gray-200 dark:border-gray-700">
            <div class="flex items-center gap-2 mb-4">
                <span class="text-lg text-blue-500">"📅"</span>
                <h2 class="text-lg font-semibold text-gray-900 dark:text-white">"Upcoming Events"</h2>
            </div>
            <div class="space-y-3">
                {upcoming_events()
                    .into_iter()
                    .map(|event| view! {
                        <div class="flex items-center justify-between py-2 border-b border-gray-100 dark:border-gray-700 last:border-b-0">
                            <div class="flex-1">
                                <div class="flex items-center gap-2">
                                    <span class="text-sm font-medium text-gray-900 dark:text-white">{event.name}</span>
                                    <span class=format!("px-2 py-1 text-xs rounded-full {}", event.importance.badge_class())>
                                        {event.importance.as_str()}
                                    </span>
                                </div>
                                <div class="text-sm text-gray-600 dark:text-gray-400">{event.schedule_line()}</div>
                            </div>
                            <span class="text-gray-400 hover:text-blue-500 cursor-pointer">"🔔"</span>
                        </div>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
