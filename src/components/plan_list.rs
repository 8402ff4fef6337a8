//! Plan List Component
//!
//! Results container. Each render replaces the previous content wholesale:
//! loading indicator, empty-state message, error message, or the plan
//! fragments in server order followed by the pagination control.

use leptos::prelude::*;

use crate::components::{Pagination, PlanView};

#[component]
pub fn PlanList(
    view_state: ReadSignal<PlanView>,
    #[prop(into)] on_navigate: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="plan-list" id="plan_list">
            {move || match view_state.get() {
                PlanView::Loading => view! {
                    <div class="loading"></div>
                }.into_any(),
                PlanView::Empty => view! {
                    <p class="no-results">"No plans with your filtering found!"</p>
                }.into_any(),
                PlanView::Failed(_) => view! {
                    <p class="filter-error">
                        "Only numbers may be entered in the minimum and maximum fields!"
                    </p>
                }.into_any(),
                PlanView::Page(page) => {
                    let meta = page.meta.clone();
                    view! {
                        {page.objects.iter().map(|plan| view! {
                            <div class="plan-row" inner_html=plan.html.clone()></div>
                        }).collect_view()}
                        <Pagination meta=meta on_navigate=on_navigate />
                    }.into_any()
                }
            }}
        </div>
    }
}
