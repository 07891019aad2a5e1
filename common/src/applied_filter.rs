//! Applied filter tracking: chips derived from the live URL, and their
//! removal links.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::facet::Facet;
use crate::product_filter::{PRICE_FILTER_KEY, ProductFilter, parse_filter_value};
use crate::query_state::{FILTER_URL_PREFIX, QueryState};

/// A materialized view of one active selection, reconstructed from the
/// URL on every render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppliedFilter {
    pub label: String,
    pub filter: ProductFilter,
}

/// Derive the applied filters from the current params, one per namespaced
/// pair, in first-seen order. Labels are resolved against the catalog's
/// option inputs; price gets a synthesized range label; anything unmatched
/// falls back to the stored value. Malformed entries are logged and
/// skipped so a corrupted query string never blocks rendering.
pub fn applied_filters_from_params(params: &QueryState, facets: &[Facet]) -> Vec<AppliedFilter> {
    let labels = option_labels(facets);

    let mut applied = Vec::new();
    for (key, raw) in params.iter() {
        let Some(bare_key) = key.strip_prefix(FILTER_URL_PREFIX) else {
            continue;
        };
        let value = match parse_filter_value(raw) {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!("ignoring malformed applied filter {}: {}", key, err);
                continue;
            }
        };

        let label = if bare_key == PRICE_FILTER_KEY {
            price_label(&value)
        } else {
            labels
                .get(&(bare_key.to_string(), value.to_string()))
                .cloned()
                .unwrap_or_else(|| raw.to_string())
        };

        let mut filter = ProductFilter::new();
        filter.insert(bare_key.to_string(), value);
        applied.push(AppliedFilter { label, filter });
    }
    applied
}

/// Stable identity for one applied selection. Labels may repeat across
/// facets ("Red" under two variant dimensions); the serialized payload
/// never does.
pub fn applied_filter_key(filter: &AppliedFilter) -> String {
    Value::Object(filter.filter.clone()).to_string()
}

/// Removal link: a new URL with exactly the matching pairs deleted and
/// everything else, including other values under the same key, preserved
/// in order. Deleting a pair that is no longer present is a no-op.
pub fn applied_filter_link(filter: &AppliedFilter, params: &QueryState, pathname: &str) -> String {
    let mut params = params.clone();
    for (key, value) in &filter.filter {
        let full_key = format!("{FILTER_URL_PREFIX}{key}");
        params.remove_pair(&full_key, &value.to_string());
    }
    format!("{pathname}?{params}")
}

fn option_labels(facets: &[Facet]) -> HashMap<(String, String), String> {
    let mut labels = HashMap::new();
    for facet in facets {
        for option in &facet.options {
            let Ok(filter) = option.input.clone().into_filter() else {
                continue;
            };
            for (key, value) in &filter {
                labels.insert((key.clone(), value.to_string()), option.label.clone());
            }
        }
    }
    labels
}

fn price_label(value: &Value) -> String {
    let min = value.get("min").and_then(Value::as_f64);
    let max = value.get("max").and_then(Value::as_f64);
    match (min, max) {
        (Some(min), Some(max)) => format!("Price: {min} - {max}"),
        (Some(min), None) => format!("Price: from {min}"),
        (None, Some(max)) => format!("Price: up to {max}"),
        (None, None) => "Price".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facet::{FacetOption, FacetType};
    use crate::product_filter::{FilterInput, filter_input_to_params};
    use serde_json::json;

    fn color_facets() -> Vec<Facet> {
        vec![Facet {
            id: "filter.v.option.color".to_string(),
            label: "Color".to_string(),
            facet_type: FacetType::List,
            options: vec![FacetOption {
                id: "red".to_string(),
                label: "Red".to_string(),
                count: 4,
                input: FilterInput::Raw(
                    r#"{"variantOption":{"name":"color","value":"red"}}"#.to_string(),
                ),
            }],
        }]
    }

    fn red_filter() -> ProductFilter {
        let mut filter = ProductFilter::new();
        filter.insert(
            "variantOption".to_string(),
            json!({"name": "color", "value": "red"}),
        );
        filter
    }

    #[test]
    fn applied_filters_follow_first_seen_order() {
        let mut params = filter_input_to_params(&red_filter(), &QueryState::new());
        params.append("q", "boots");
        let mut price = ProductFilter::new();
        price.insert("price".to_string(), json!({"min": 100.0}));
        let params = filter_input_to_params(&price, &params);

        let applied = applied_filters_from_params(&params, &color_facets());
        assert_eq!(applied.len(), 2);
        assert_eq!(applied[0].label, "Red");
        assert_eq!(applied[1].label, "Price: from 100");
    }

    #[test]
    fn labels_fall_back_to_the_stored_value() {
        let mut params = QueryState::new();
        params.append("filter.tag", r#""sale""#);
        let applied = applied_filters_from_params(&params, &[]);
        assert_eq!(applied[0].label, r#""sale""#);
    }

    #[test]
    fn malformed_entries_are_skipped() {
        let mut params = QueryState::new();
        params.append("filter.tag", "{broken");
        let applied = applied_filters_from_params(&params, &[]);
        assert!(applied.is_empty());
    }

    #[test]
    fn removal_deletes_only_the_matching_pair() {
        let params = QueryState::parse("q=boots&sort=newest");
        let params = filter_input_to_params(&red_filter(), &params);
        let applied = applied_filters_from_params(&params, &color_facets());

        let href = applied_filter_link(&applied[0], &params, "/collections/all");
        let after = QueryState::parse(href.split('?').nth(1).unwrap());
        assert_eq!(after, QueryState::parse("q=boots&sort=newest"));
    }

    #[test]
    fn keys_distinguish_same_label_selections() {
        let red_color = AppliedFilter {
            label: "Red".to_string(),
            filter: red_filter(),
        };
        let mut tag = ProductFilter::new();
        tag.insert("tag".to_string(), json!("red"));
        let red_tag = AppliedFilter {
            label: "Red".to_string(),
            filter: tag,
        };
        assert_ne!(applied_filter_key(&red_color), applied_filter_key(&red_tag));
    }

    #[test]
    fn removing_a_stale_reference_is_a_no_op() {
        let params = QueryState::parse("q=boots");
        let stale = AppliedFilter {
            label: "Red".to_string(),
            filter: red_filter(),
        };
        let href = applied_filter_link(&stale, &params, "/collections/all");
        assert_eq!(href, "/collections/all?q=boots");
    }
}
