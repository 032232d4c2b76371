//! EconDashboard
//!
//! Economic indicator dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Indicator cards with actual vs. consensus line charts
//! - Market snapshot strip and upcoming release calendar
//! - Watchlist stars and dark mode
//!
//! # Architecture
//!
//! Client-side rendered (CSR) Leptos application. Data model, styling rules and
//! the per-card state machine come from the `econdash` crate; this crate only
//! draws them and wires browser events to state actions.

use leptos::*;

mod api;
mod app;
mod components;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
