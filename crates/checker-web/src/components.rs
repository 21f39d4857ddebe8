//! UI Components
//!
//! Read-only projections of the page state.

use checker_core::ViewState;
use leptos::prelude::*;

/// Result region
#[component]
pub fn ResultPanel(state: RwSignal<ViewState>) -> impl IntoView {
    view! {
        <div id="result" class="result">
            {move || state.with(|s| s.result.clone())}
        </div>
    }
}

/// Quota summary region, one line per row
#[component]
pub fn StatsPanel(state: RwSignal<ViewState>) -> impl IntoView {
    view! {
        <div id="stats" class="stats">
            {move || {
                state
                    .with(|s| s.stats.lines())
                    .into_iter()
                    .map(|line| view! { <p class="stat-line">{line}</p> })
                    .collect_view()
            }}
        </div>
    }
}
