//! Comment Like Widgets
//!
//! Upgrades every server-rendered `[data-comment]` placeholder into a live
//! `LikeButton`, carrying over the pre-rendered button and count fragments.

use leptos::mount::mount_to;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::components::LikeButton;

/// Placeholder elements carrying a comment id
pub const WIDGET_SELECTOR: &str = "[data-comment]";

pub fn mount_like_widgets(document: &web_sys::Document) {
    let Ok(nodes) = document.query_selector_all(WIDGET_SELECTOR) else {
        return;
    };

    for index in 0..nodes.length() {
        let Some(node) = nodes.item(index) else {
            continue;
        };
        let Ok(element) = node.dyn_into::<web_sys::HtmlElement>() else {
            continue;
        };

        let comment_id = element
            .get_attribute("data-comment")
            .and_then(|raw| raw.parse::<u32>().ok());
        let Some(comment_id) = comment_id else {
            web_sys::console::warn_1(
                &"[LIKES] Skipping like widget without a numeric data-comment".into(),
            );
            continue;
        };

        let button_html = child_html(&element, ".like-toggle");
        let likes_html = child_html(&element, ".like-count");

        element.set_inner_html("");
        mount_to(element, move || {
            view! {
                <LikeButton
                    comment_id=comment_id
                    button_html=button_html
                    likes_html=likes_html
                />
            }
        })
        .forget();
    }
}

fn child_html(element: &web_sys::HtmlElement, selector: &str) -> String {
    element
        .query_selector(selector)
        .ok()
        .flatten()
        .map(|child| child.inner_html())
        .unwrap_or_default()
}
