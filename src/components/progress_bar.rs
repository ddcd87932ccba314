//! Progress Bar Component
//!
//! Thin horizontal bar showing overall roadmap completion.

use leptos::prelude::*;

/// Progress bar filled to `value` percent (clamped to 0..=100)
#[component]
pub fn ProgressBar(#[prop(into)] value: Signal<u8>) -> impl IntoView {
    let width = move || format!("{}%", value.get().min(100));

    view! {
        <div class="progress">
            <div class="progress__inner" style:width=width></div>
        </div>
    }
}
