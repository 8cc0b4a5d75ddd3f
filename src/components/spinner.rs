//! Staggered loading spinner shown while a page waits on the backend.

use leptos::prelude::*;

const DOT_COUNT: usize = 5;
const DOT_DELAY_SECONDS: f64 = 0.12;

/// Row of pulsing dots with staggered animation delays.
#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <div class="loading-spinner" role="status">
            {(0..DOT_COUNT)
                .map(|i| {
                    let delay = format!("{:.2}s", i as f64 * DOT_DELAY_SECONDS);
                    view! { <div class="loading-spinner__dot" style:animation-delay=delay></div> }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
