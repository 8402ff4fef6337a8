//! Plan Finder Page Root

use leptos::prelude::*;

use crate::components::PlanFinder;
use crate::config;

#[component]
pub fn App() -> impl IntoView {
    let finder_config = web_sys::window()
        .and_then(|w| w.document())
        .map(|document| config::load(&document))
        .unwrap_or_default();

    view! {
        <PlanFinder config=finder_config />
    }
}
