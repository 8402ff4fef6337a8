//! Filter Serialization
//!
//! Pure translation of filter-control state into the listing backend's
//! query-string convention (`field__in`, `field__gte`, `field__lte`,
//! `order_by`). No DOM access here; the controller snapshots its signals
//! into a `FilterState` and hands it over.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Results per page, fixed
pub const PAGE_SIZE: u32 = 3;
/// Response representation requested from the backend
pub const RESPONSE_FORMAT: &str = "json";
/// Listing endpoint all filter queries go against
pub const PLAN_ENDPOINT: &str = "/find/data/main/plan/";
/// Ordering selector value meaning "no preference"
pub const ORDER_ANY: &str = "ALL";

/// Multi-valued field: zero or more chosen values for one API parameter
#[derive(Debug, Clone, PartialEq)]
pub struct MultiFilter {
    pub api_name: &'static str,
    pub selected: Vec<String>,
}

/// Range field: independent minimum and maximum bounds, either may be empty.
/// Values are passed through unvalidated; the backend rejects non-numeric
/// input.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeFilter {
    pub api_name: &'static str,
    pub min: String,
    pub max: String,
}

/// Snapshot of every filter control at trigger time
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    pub multi: Vec<MultiFilter>,
    pub range: Vec<RangeFilter>,
    pub ordering: String,
}

impl FilterState {
    pub fn empty() -> Self {
        Self {
            multi: Vec::new(),
            range: Vec::new(),
            ordering: ORDER_ANY.to_string(),
        }
    }
}

/// Serialize a filter snapshot into query parameters.
///
/// An unselected/empty control contributes nothing. A multi-select with
/// choices contributes one `__in` parameter, values comma-joined in
/// selection order. Range bounds contribute `__gte`/`__lte` independently.
pub fn query_params(state: &FilterState) -> Vec<(String, String)> {
    let mut params = vec![
        ("limit".to_string(), PAGE_SIZE.to_string()),
        ("format".to_string(), RESPONSE_FORMAT.to_string()),
    ];

    for field in &state.multi {
        if !field.selected.is_empty() {
            params.push((format!("{}__in", field.api_name), field.selected.join(",")));
        }
    }

    for field in &state.range {
        if !field.min.is_empty() {
            params.push((format!("{}__gte", field.api_name), field.min.clone()));
        }
        if !field.max.is_empty() {
            params.push((format!("{}__lte", field.api_name), field.max.clone()));
        }
    }

    if state.ordering != ORDER_ANY {
        params.push(("order_by".to_string(), state.ordering.clone()));
    }

    params
}

// Everything but unreserved characters gets escaped
const QUERY_ENCODE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Percent-encode parameters into a query string
pub fn encode_query(params: &[(String, String)]) -> String {
    params
        .iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                utf8_percent_encode(key, QUERY_ENCODE),
                utf8_percent_encode(value, QUERY_ENCODE)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

/// Full listing URL for a filter snapshot
pub fn plan_search_url(state: &FilterState) -> String {
    format!("{}?{}", PLAN_ENDPOINT, encode_query(&query_params(state)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_state_emits_only_base_parameters() {
        let params = query_params(&FilterState::empty());
        assert_eq!(
            params,
            vec![
                ("limit".to_string(), "3".to_string()),
                ("format".to_string(), "json".to_string()),
            ]
        );
    }

    #[test]
    fn unselected_multi_field_contributes_nothing() {
        let mut state = FilterState::empty();
        state.multi.push(MultiFilter {
            api_name: "location__country",
            selected: vec![],
        });
        assert_eq!(query_params(&state).len(), 2);
    }

    #[test]
    fn multi_field_joins_values_in_selection_order() {
        let mut state = FilterState::empty();
        state.multi.push(MultiFilter {
            api_name: "billing_time",
            selected: vec!["y".to_string(), "m".to_string()],
        });
        let params = query_params(&state);
        assert!(params.contains(&("billing_time__in".to_string(), "y,m".to_string())));
        assert_eq!(params.len(), 3);
    }

    #[test]
    fn range_bounds_are_independent() {
        let bound = |min: &str, max: &str| {
            let mut state = FilterState::empty();
            state.range.push(RangeFilter {
                api_name: "memory",
                min: min.to_string(),
                max: max.to_string(),
            });
            query_params(&state)
                .into_iter()
                .filter(|(k, _)| k.starts_with("memory"))
                .collect::<Vec<_>>()
        };

        assert_eq!(bound("512", ""), vec![("memory__gte".to_string(), "512".to_string())]);
        assert_eq!(bound("", "2048"), vec![("memory__lte".to_string(), "2048".to_string())]);
        assert_eq!(
            bound("512", "2048"),
            vec![
                ("memory__gte".to_string(), "512".to_string()),
                ("memory__lte".to_string(), "2048".to_string()),
            ]
        );
        assert!(bound("", "").is_empty());
    }

    #[test]
    fn ordering_sentinel_is_omitted() {
        let state = FilterState::empty();
        assert!(!query_params(&state).iter().any(|(k, _)| k == "order_by"));

        let mut state = FilterState::empty();
        state.ordering = "-cost".to_string();
        let params = query_params(&state);
        assert!(params.contains(&("order_by".to_string(), "-cost".to_string())));
    }

    #[test]
    fn country_and_memory_minimum_scenario() {
        let mut state = FilterState::empty();
        state.multi.push(MultiFilter {
            api_name: "location__country",
            selected: vec!["US".to_string()],
        });
        state.range.push(RangeFilter {
            api_name: "memory",
            min: "512".to_string(),
            max: String::new(),
        });

        let url = plan_search_url(&state);
        assert_eq!(
            url,
            "/find/data/main/plan/?limit=3&format=json&location__country__in=US&memory__gte=512"
        );
        assert!(!url.contains("memory__lte"));
    }

    #[test]
    fn encoding_escapes_reserved_characters() {
        let params = vec![
            ("server_type__in".to_string(), "v,d".to_string()),
            ("order_by".to_string(), "disk space".to_string()),
        ];
        assert_eq!(
            encode_query(&params),
            "server_type__in=v%2Cd&order_by=disk%20space"
        );
    }

    #[test]
    fn non_numeric_range_input_is_passed_through() {
        // The backend owns validation; the client must not second-guess it.
        let mut state = FilterState::empty();
        state.range.push(RangeFilter {
            api_name: "cost",
            min: "cheap".to_string(),
            max: String::new(),
        });
        let params = query_params(&state);
        assert!(params.contains(&("cost__gte".to_string(), "cheap".to_string())));
    }
}
