//! Pagination Component
//!
//! Pure function of the page meta block: previous/next entries, each
//! disabled when the server reports no page in that direction, around a
//! "Page X of Y" indicator.

use leptos::prelude::*;

use crate::models::PageMeta;

#[component]
pub fn Pagination(meta: PageMeta, #[prop(into)] on_navigate: Callback<String>) -> impl IntoView {
    let indicator = format!("Page {} of {}", meta.current_page(), meta.total_pages());

    let previous_class = nav_class(&meta.previous);
    let next_class = nav_class(&meta.next);
    let previous = meta.previous;
    let next = meta.next;

    view! {
        <ul class="pagination">
            <li class=previous_class>
                <a on:click=move |_| {
                    if let Some(url) = previous.clone() {
                        on_navigate.run(url);
                    }
                }>"\u{ab}"</a>
            </li>
            <li><a>{indicator}</a></li>
            <li class=next_class>
                <a on:click=move |_| {
                    if let Some(url) = next.clone() {
                        on_navigate.run(url);
                    }
                }>"\u{bb}"</a>
            </li>
        </ul>
    }
}

fn nav_class(target: &Option<String>) -> &'static str {
    if target.is_some() {
        ""
    } else {
        "disabled"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_link_disables_the_entry() {
        assert_eq!(nav_class(&None), "disabled");
        assert_eq!(nav_class(&Some("/p?offset=6".to_string())), "");
    }
}
