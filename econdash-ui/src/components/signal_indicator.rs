//! Signal Indicator Component

use econdash::indicators::Signal as IndicatorSignal;
use econdash::view::SignalStyle;
use leptos::*;

/// Icon and label for a snapshot's signal
#[component]
pub fn SignalIndicator(signal: IndicatorSignal) -> impl IntoView {
    let style = SignalStyle::for_signal(&signal);

    view! {
        <div class=format!("flex items-center gap-1 {}", style.tone.css_class())>
            <span class="text-sm">{style.icon.glyph()}</span>
            <span class="text-sm font-medium capitalize">{signal.label().to_string()}</span>
        </div>
    }
}
