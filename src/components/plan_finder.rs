//! Plan Finder Controller
//!
//! Owns the filter signals and the fetch cycle. Every trigger (initial
//! load, filter change, pagination click) bumps a request token; a response
//! only lands if its token is still the latest, so the last-triggered
//! request wins even when an earlier one resolves later.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, PlanOutcome};
use crate::components::{FilterPanel, PlanList};
use crate::config::FinderConfig;
use crate::models::PlanPage;
use crate::query::{self, FilterState, MultiFilter, RangeFilter};

/// What the results container currently shows
#[derive(Debug, Clone, PartialEq)]
pub enum PlanView {
    Loading,
    Page(PlanPage),
    Empty,
    Failed(String),
}

impl From<PlanOutcome> for PlanView {
    fn from(outcome: PlanOutcome) -> Self {
        match outcome {
            PlanOutcome::Page(page) => PlanView::Page(page),
            PlanOutcome::Empty => PlanView::Empty,
            PlanOutcome::Failed(err) => PlanView::Failed(err),
        }
    }
}

/// Min/max signal pair for one range field
#[derive(Clone, Copy)]
pub struct RangeSignals {
    pub min: RwSignal<String>,
    pub max: RwSignal<String>,
}

impl RangeSignals {
    fn new() -> Self {
        Self {
            min: RwSignal::new(String::new()),
            max: RwSignal::new(String::new()),
        }
    }
}

/// One signal per filter control
#[derive(Clone, Copy)]
pub struct FilterSignals {
    pub countries: RwSignal<Vec<String>>,
    pub providers: RwSignal<Vec<String>>,
    pub billing: RwSignal<Vec<String>>,
    pub datacenters: RwSignal<Vec<String>>,
    pub server_types: RwSignal<Vec<String>>,
    pub memory: RangeSignals,
    pub disk_space: RangeSignals,
    pub bandwidth: RangeSignals,
    pub ipv4_space: RangeSignals,
    pub ipv6_space: RangeSignals,
    pub cost: RangeSignals,
    pub ordering: RwSignal<String>,
}

impl FilterSignals {
    pub fn new() -> Self {
        Self {
            countries: RwSignal::new(Vec::new()),
            providers: RwSignal::new(Vec::new()),
            billing: RwSignal::new(Vec::new()),
            datacenters: RwSignal::new(Vec::new()),
            server_types: RwSignal::new(Vec::new()),
            memory: RangeSignals::new(),
            disk_space: RangeSignals::new(),
            bandwidth: RangeSignals::new(),
            ipv4_space: RangeSignals::new(),
            ipv6_space: RangeSignals::new(),
            cost: RangeSignals::new(),
            ordering: RwSignal::new(query::ORDER_ANY.to_string()),
        }
    }

    /// Snapshot every control into a serializable state. Reads all signals,
    /// so calling this inside an effect subscribes the effect to each one.
    pub fn snapshot(&self) -> FilterState {
        FilterState {
            multi: vec![
                MultiFilter {
                    api_name: "location__country",
                    selected: self.countries.get(),
                },
                MultiFilter {
                    api_name: "offer__provider__id",
                    selected: self.providers.get(),
                },
                MultiFilter {
                    api_name: "billing_time",
                    selected: self.billing.get(),
                },
                MultiFilter {
                    api_name: "location__datacenter__id",
                    selected: self.datacenters.get(),
                },
                MultiFilter {
                    api_name: "server_type",
                    selected: self.server_types.get(),
                },
            ],
            range: vec![
                RangeFilter {
                    api_name: "memory",
                    min: self.memory.min.get(),
                    max: self.memory.max.get(),
                },
                RangeFilter {
                    api_name: "disk_space",
                    min: self.disk_space.min.get(),
                    max: self.disk_space.max.get(),
                },
                RangeFilter {
                    api_name: "bandwidth",
                    min: self.bandwidth.min.get(),
                    max: self.bandwidth.max.get(),
                },
                RangeFilter {
                    api_name: "ipv4_space",
                    min: self.ipv4_space.min.get(),
                    max: self.ipv4_space.max.get(),
                },
                RangeFilter {
                    api_name: "ipv6_space",
                    min: self.ipv6_space.min.get(),
                    max: self.ipv6_space.max.get(),
                },
                RangeFilter {
                    api_name: "cost",
                    min: self.cost.min.get(),
                    max: self.cost.max.get(),
                },
            ],
            ordering: self.ordering.get(),
        }
    }
}

#[component]
pub fn PlanFinder(config: FinderConfig) -> impl IntoView {
    let filters = FilterSignals::new();
    let (view_state, set_view_state) = signal(PlanView::Loading);
    let request_seq = StoredValue::new(0u64);

    let load = move |url: String| {
        let token = request_seq.with_value(|seq| seq + 1);
        request_seq.set_value(token);
        set_view_state.set(PlanView::Loading);
        spawn_local(async move {
            let outcome = api::fetch_plans(&url).await;
            // A newer request was issued while this one was in flight;
            // its result owns the container now.
            if request_seq.get_value() == token {
                set_view_state.set(outcome.into());
            }
        });
    };

    // Runs once on mount with the default filter values, then again on
    // every filter change.
    Effect::new(move |_| {
        let state = filters.snapshot();
        load(query::plan_search_url(&state));
    });

    // Pagination links carry full server-built URLs, used verbatim
    let on_navigate = Callback::new(move |url: String| load(url));

    view! {
        <div class="plan-finder">
            <FilterPanel config=config filters=filters />
            <PlanList view_state=view_state on_navigate=on_navigate />
        </div>
    }
}
