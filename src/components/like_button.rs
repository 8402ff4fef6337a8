//! Like Button Component
//!
//! One widget per comment. The click handler lives on the stable wrapper,
//! so swapping the server-rendered fragments never needs a rebind.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;

/// Widget lifecycle. `Failed` is terminal for the page view: the control
/// stays disabled until reload, with no retry.
#[derive(Debug, Clone, Copy, PartialEq)]
enum LikeState {
    Idle,
    Pending,
    Failed,
}

#[component]
pub fn LikeButton(comment_id: u32, button_html: String, likes_html: String) -> impl IntoView {
    let (state, set_state) = signal(LikeState::Idle);
    let (button, set_button) = signal(button_html);
    let (likes, set_likes) = signal(likes_html);
    let (popover_open, set_popover_open) = signal(false);

    let on_click = move |_| {
        if !accepts_click(state.get()) {
            return;
        }
        set_state.set(LikeState::Pending);
        set_popover_open.set(false);

        spawn_local(async move {
            match api::toggle_like(comment_id).await {
                Ok(fragments) => {
                    set_button.set(fragments.button);
                    set_likes.set(fragments.likes);
                    set_state.set(LikeState::Idle);
                }
                Err(err) => {
                    web_sys::console::warn_1(
                        &format!("[LIKES] Toggle failed for comment {}: {}", comment_id, err)
                            .into(),
                    );
                    set_state.set(LikeState::Failed);
                }
            }
        });
    };

    let widget_class = move || widget_class(state.get());

    let count_class = move || {
        if popover_open.get() && state.get() == LikeState::Idle {
            "like-count popover-open"
        } else {
            "like-count"
        }
    };

    view! {
        <span class=widget_class>
            <span class="like-toggle" on:click=on_click inner_html=move || button.get()></span>
            <span
                class=count_class
                on:mouseenter=move |_| set_popover_open.set(true)
                on:mouseleave=move |_| set_popover_open.set(false)
                inner_html=move || likes.get()
            ></span>
        </span>
    }
}

/// Only an idle widget reacts to clicks; a pending or failed one is inert
fn accepts_click(state: LikeState) -> bool {
    state == LikeState::Idle
}

fn widget_class(state: LikeState) -> &'static str {
    match state {
        LikeState::Idle => "like-widget",
        LikeState::Pending => "like-widget disabled",
        LikeState::Failed => "like-widget disabled like-failed",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_widget_stays_disabled_with_error_styling() {
        let class = widget_class(LikeState::Failed);
        assert!(class.contains("disabled"));
        assert!(class.contains("like-failed"));
        assert!(!accepts_click(LikeState::Failed));
    }

    #[test]
    fn pending_widget_ignores_further_clicks() {
        assert!(!accepts_click(LikeState::Pending));
        assert_eq!(widget_class(LikeState::Pending), "like-widget disabled");
    }

    #[test]
    fn idle_widget_is_clickable_and_unstyled() {
        assert!(accepts_click(LikeState::Idle));
        assert_eq!(widget_class(LikeState::Idle), "like-widget");
    }
}
