//! Finder Configuration
//!
//! Filter choices are server data (countries with live offers, providers,
//! datacenters), so the host page embeds them as a JSON block the finder
//! reads on mount. Anything missing falls back to defaults.

use serde::Deserialize;

/// Id of the JSON `<script>` block the host page may embed
pub const CONFIG_ELEMENT_ID: &str = "finder-config";

/// One select option
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Choice {
    pub value: String,
    pub label: String,
}

impl Choice {
    pub fn new(value: &str, label: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
        }
    }
}

/// Choice lists for every filter select
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FinderConfig {
    #[serde(default)]
    pub countries: Vec<Choice>,
    #[serde(default)]
    pub providers: Vec<Choice>,
    #[serde(default)]
    pub billing_periods: Vec<Choice>,
    #[serde(default)]
    pub datacenters: Vec<Choice>,
    #[serde(default)]
    pub server_types: Vec<Choice>,
    /// Allowed `order_by` values; fixed set, overridable by the page
    #[serde(default = "default_orderings")]
    pub orderings: Vec<Choice>,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            countries: Vec::new(),
            providers: Vec::new(),
            billing_periods: Vec::new(),
            datacenters: Vec::new(),
            server_types: Vec::new(),
            orderings: default_orderings(),
        }
    }
}

fn default_orderings() -> Vec<Choice> {
    vec![
        Choice::new("cost", "Cost (lowest first)"),
        Choice::new("-cost", "Cost (highest first)"),
        Choice::new("memory", "Memory (lowest first)"),
        Choice::new("-memory", "Memory (highest first)"),
        Choice::new("disk_space", "Disk space (lowest first)"),
        Choice::new("-disk_space", "Disk space (highest first)"),
    ]
}

/// Read the embedded config block, falling back to defaults when the page
/// carries none or the JSON is broken
pub fn load(document: &web_sys::Document) -> FinderConfig {
    let Some(element) = document.get_element_by_id(CONFIG_ELEMENT_ID) else {
        return FinderConfig::default();
    };
    let raw = element.text_content().unwrap_or_default();
    match serde_json::from_str(&raw) {
        Ok(config) => config,
        Err(err) => {
            web_sys::console::warn_1(&format!("[FINDER] Invalid finder config: {}", err).into());
            FinderConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_partial_config() {
        let raw = r#"{
            "countries": [
                {"value": "US", "label": "United States"},
                {"value": "NL", "label": "Netherlands"}
            ],
            "billing_periods": [
                {"value": "m", "label": "Monthly"},
                {"value": "y", "label": "Yearly"}
            ]
        }"#;

        let config: FinderConfig = serde_json::from_str(raw).unwrap();
        assert_eq!(config.countries.len(), 2);
        assert_eq!(config.countries[0], Choice::new("US", "United States"));
        assert!(config.providers.is_empty());
        // Orderings fall back to the fixed set
        assert_eq!(config.orderings, default_orderings());
    }

    #[test]
    fn default_orderings_are_signed_pairs() {
        let orderings = default_orderings();
        assert!(orderings.iter().any(|c| c.value == "cost"));
        assert!(orderings.iter().any(|c| c.value == "-cost"));
    }
}
