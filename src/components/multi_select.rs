//! Multi-Select Component
//!
//! Filter select allowing zero or more choices; an empty selection means
//! "no filter" for that field.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::config::Choice;

#[component]
pub fn MultiSelect(
    #[prop(into)] label: String,
    options: Vec<Choice>,
    selection: RwSignal<Vec<String>>,
) -> impl IntoView {
    let read_selection = move |ev: web_sys::Event| {
        let target = ev.target().unwrap();
        let select = target.dyn_ref::<web_sys::HtmlSelectElement>().unwrap();
        let chosen = select.selected_options();

        let mut values = Vec::with_capacity(chosen.length() as usize);
        for index in 0..chosen.length() {
            if let Some(option) = chosen.item(index) {
                if let Some(option) = option.dyn_ref::<web_sys::HtmlOptionElement>() {
                    values.push(option.value());
                }
            }
        }
        selection.set(values);
    };

    view! {
        <div class="filter-field">
            <span class="filter-label">{label}</span>
            <select multiple=true on:change=read_selection>
                {options.into_iter().map(|choice| view! {
                    <option value=choice.value>{choice.label}</option>
                }).collect_view()}
            </select>
        </div>
    }
}
