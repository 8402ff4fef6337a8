//! Plan Finder Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod likes;
mod models;
mod query;

use app::App;
use leptos::mount::mount_to;
use wasm_bindgen::JsCast;

/// Element the plan finder mounts into, when present on the page.
const FINDER_MOUNT_ID: &str = "plan-finder";

fn main() {
    console_error_panic_hook::set_once();

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    // The finder and the like widgets are independent features; a page may
    // carry either or both.
    if let Some(root) = document.get_element_by_id(FINDER_MOUNT_ID) {
        if let Ok(root) = root.dyn_into::<web_sys::HtmlElement>() {
            mount_to(root, App).forget();
        }
    }

    likes::mount_like_widgets(&document);
}
