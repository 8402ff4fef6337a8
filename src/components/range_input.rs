//! Range Input Component
//!
//! Min/max pair for one numeric filter field. Plain text inputs: the
//! backend owns numeric validation, the client passes values through.

use leptos::prelude::*;

use crate::components::RangeSignals;

#[component]
pub fn RangeInput(#[prop(into)] label: String, range: RangeSignals) -> impl IntoView {
    view! {
        <div class="filter-field filter-range">
            <span class="filter-label">{label}</span>
            <input
                type="text"
                class="range-min"
                placeholder="min"
                prop:value=move || range.min.get()
                on:change=move |ev| range.min.set(event_target_value(&ev))
            />
            <input
                type="text"
                class="range-max"
                placeholder="max"
                prop:value=move || range.max.get()
                on:change=move |ev| range.max.set(event_target_value(&ev))
            />
        </div>
    }
}
