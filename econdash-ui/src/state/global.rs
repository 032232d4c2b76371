//! Global Application State
//!
//! Wraps the shared `AppState` (theme, watchlist, card slots) in a Leptos
//! signal. Components mutate it only through the methods below.

use econdash::indicators::IndicatorKey;
use econdash::view::{Action, AppState, ChartCard, ThemeState};
use leptos::*;
use wasm_bindgen::JsCast;

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct GlobalState {
    pub app: RwSignal<AppState>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    provide_context(GlobalState {
        app: create_rw_signal(AppState::default()),
    });
}

impl GlobalState {
    pub fn toggle_theme(&self) {
        self.app.update(|app| app.dispatch(Action::ToggleTheme));
    }

    pub fn toggle_watch(&self, key: IndicatorKey) {
        self.app.update(|app| app.dispatch(Action::ToggleWatch(key)));
    }

    pub fn theme(&self) -> ThemeState {
        self.app.with(|app| app.theme())
    }

    pub fn is_dark(&self) -> bool {
        self.theme().is_dark()
    }

    pub fn is_watched(&self, key: IndicatorKey) -> bool {
        self.app.with(|app| app.is_watched(key))
    }

    pub fn card_count(&self) -> usize {
        self.app.with_untracked(|app| app.cards().len())
    }

    pub fn card(&self, slot: usize) -> Option<ChartCard> {
        self.app.with(|app| app.card(slot).cloned())
    }
}

/// Reflect the theme on the document root: the `dark` class plus the
/// tooltip custom properties read by chart tooltips
pub fn apply_theme(theme: ThemeState) {
    let Some(root) = document().document_element() else {
        return;
    };

    let classes = root.class_list();
    let _ = match theme.document_class() {
        Some(class) => classes.add_1(class),
        None => classes.remove_1("dark"),
    };

    if let Ok(root) = root.dyn_into::<web_sys::HtmlElement>() {
        let style = root.style();
        for (name, value) in theme.tooltip().css_variables() {
            let _ = style.set_property(name, value);
        }
    }
}
