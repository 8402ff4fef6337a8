//! Filter Panel Component
//!
//! Lays out the finder's filter controls and binds each to its signal.

use leptos::prelude::*;

use crate::components::{FilterSignals, MultiSelect, RangeInput};
use crate::config::{Choice, FinderConfig};
use crate::query;

#[component]
pub fn FilterPanel(config: FinderConfig, filters: FilterSignals) -> impl IntoView {
    view! {
        <form class="filter-panel" on:submit=move |ev: web_sys::SubmitEvent| ev.prevent_default()>
            <MultiSelect label="Country" options=config.countries selection=filters.countries />
            <MultiSelect label="Provider" options=config.providers selection=filters.providers />
            <MultiSelect label="Billing" options=config.billing_periods selection=filters.billing />
            <MultiSelect label="Datacenter" options=config.datacenters selection=filters.datacenters />
            <MultiSelect label="Server type" options=config.server_types selection=filters.server_types />

            <RangeInput label="Memory (MB)" range=filters.memory />
            <RangeInput label="Disk space (GB)" range=filters.disk_space />
            <RangeInput label="Bandwidth (GB)" range=filters.bandwidth />
            <RangeInput label="IPv4 addresses" range=filters.ipv4_space />
            <RangeInput label="IPv6 subnets" range=filters.ipv6_space />
            <RangeInput label="Cost" range=filters.cost />

            <OrderingSelect options=config.orderings ordering=filters.ordering />
        </form>
    }
}

/// Single-valued ordering selector with a "no preference" sentinel
#[component]
fn OrderingSelect(options: Vec<Choice>, ordering: RwSignal<String>) -> impl IntoView {
    view! {
        <div class="filter-field">
            <span class="filter-label">"Order by"</span>
            <select on:change=move |ev| ordering.set(event_target_value(&ev))>
                <option value=query::ORDER_ANY selected=true>"No preference"</option>
                {options.into_iter().map(|choice| view! {
                    <option value=choice.value>{choice.label}</option>
                }).collect_view()}
            </select>
        </div>
    }
}
