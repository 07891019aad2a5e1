//! Filter codec: between structured filter payloads and query-string form.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::query_state::{FILTER_URL_PREFIX, QueryState};

/// Structured filter-operator payload, keyed by the storefront filter
/// operator name, e.g. `{"price":{"min":100,"max":500}}` or
/// `{"variantOption":{"name":"color","value":"red"}}`.
pub type ProductFilter = serde_json::Map<String, Value>;

/// Bare operator key whose query parameter is single-valued: a product has
/// one price, so a new price predicate always overwrites the previous one.
/// Every other operator appends (multi-select).
pub const PRICE_FILTER_KEY: &str = "price";

/// A facet option's `input` as delivered by the catalog source: either an
/// already-structured object or its JSON-serialized string form. Parsed
/// into [`ProductFilter`] exactly once at this boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterInput {
    Structured(ProductFilter),
    Raw(String),
}

impl FilterInput {
    pub fn into_filter(self) -> Result<ProductFilter, FilterInputError> {
        match self {
            FilterInput::Structured(filter) => Ok(filter),
            FilterInput::Raw(raw) => match parse_filter_value(&raw)? {
                Value::Object(filter) => Ok(filter),
                other => Err(FilterInputError::NotAnObject(other)),
            },
        }
    }
}

#[derive(Debug)]
pub enum FilterInputError {
    MalformedInput(serde_json::Error),
    NotAnObject(Value),
}

impl std::fmt::Display for FilterInputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedInput(err) => write!(f, "Failed to parse filter input: {}", err),
            Self::NotAnObject(value) => write!(f, "Filter input is not an object: {}", value),
        }
    }
}

impl std::error::Error for FilterInputError {}

/// Parse one stored query value back into its structured payload.
pub fn parse_filter_value(raw: &str) -> Result<Value, FilterInputError> {
    serde_json::from_str(raw).map_err(FilterInputError::MalformedInput)
}

/// Encode a filter payload into a new query state.
///
/// The existing params are never mutated; a derived copy is returned. For
/// each operator key: an exactly-matching pair is left alone (idempotent),
/// the price key overwrites, everything else appends so sibling selections
/// of the same facet survive.
pub fn filter_input_to_params(input: &ProductFilter, params: &QueryState) -> QueryState {
    let mut params = params.clone();
    for (key, value) in input {
        let full_key = format!("{FILTER_URL_PREFIX}{key}");
        let serialized = value.to_string();
        if params.contains_pair(&full_key, &serialized) {
            continue;
        }
        if key == PRICE_FILTER_KEY {
            params.set(&full_key, serialized);
        } else {
            params.append(full_key, serialized);
        }
    }
    params
}

/// Addition link for selecting a filter option.
pub fn filter_link(input: &ProductFilter, params: &QueryState, pathname: &str) -> String {
    let new_params = filter_input_to_params(input, params);
    format!("{pathname}?{new_params}")
}

/// Decode every namespaced pair in the params into structured payloads, in
/// first-seen order. Malformed entries are logged and skipped so a broken
/// query string never blocks the catalog query.
pub fn product_filters_from_params(params: &QueryState) -> Vec<ProductFilter> {
    let mut filters = Vec::new();
    for (key, raw) in params.iter() {
        let Some(bare_key) = key.strip_prefix(FILTER_URL_PREFIX) else {
            continue;
        };
        match parse_filter_value(raw) {
            Ok(value) => {
                let mut filter = ProductFilter::new();
                filter.insert(bare_key.to_string(), value);
                filters.push(filter);
            }
            Err(err) => {
                tracing::warn!("ignoring malformed filter param {}: {}", key, err);
            }
        }
    }
    filters
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn color_filter(value: &str) -> ProductFilter {
        let mut filter = ProductFilter::new();
        filter.insert(
            "variantOption".to_string(),
            json!({"name": "color", "value": value}),
        );
        filter
    }

    fn price_filter(min: i64, max: i64) -> ProductFilter {
        let mut filter = ProductFilter::new();
        filter.insert("price".to_string(), json!({"min": min, "max": max}));
        filter
    }

    #[test]
    fn encode_then_decode_round_trips() {
        let filter = color_filter("red");
        let params = filter_input_to_params(&filter, &QueryState::new());
        let decoded = product_filters_from_params(&params);
        assert_eq!(decoded, vec![filter]);
    }

    #[test]
    fn encode_is_idempotent() {
        let filter = color_filter("red");
        let once = filter_input_to_params(&filter, &QueryState::new());
        let twice = filter_input_to_params(&filter, &once);
        assert_eq!(once, twice);
    }

    #[test]
    fn non_price_filters_append() {
        let params = filter_input_to_params(&color_filter("red"), &QueryState::new());
        let params = filter_input_to_params(&color_filter("blue"), &params);
        assert_eq!(params.get_all("filter.variantOption").len(), 2);
    }

    #[test]
    fn price_filter_overwrites() {
        let params = filter_input_to_params(&price_filter(0, 100), &QueryState::new());
        let params = filter_input_to_params(&price_filter(100, 500), &params);
        let values = params.get_all("filter.price");
        assert_eq!(values, vec![r#"{"max":500,"min":100}"#]);
    }

    #[test]
    fn raw_input_is_parsed_once() {
        let input = FilterInput::Raw(r#"{"available":true}"#.to_string());
        let filter = input.into_filter().unwrap();
        assert_eq!(filter.get("available"), Some(&Value::Bool(true)));
    }

    #[test]
    fn malformed_raw_input_fails_without_touching_params() {
        let input = FilterInput::Raw("{not json".to_string());
        assert!(matches!(
            input.into_filter(),
            Err(FilterInputError::MalformedInput(_))
        ));
    }

    #[test]
    fn non_object_raw_input_is_rejected() {
        let input = FilterInput::Raw("42".to_string());
        assert!(matches!(
            input.into_filter(),
            Err(FilterInputError::NotAnObject(_))
        ));
    }

    #[test]
    fn untagged_input_accepts_both_wire_shapes() {
        let raw: FilterInput = serde_json::from_str(r#""{\"available\":true}""#).unwrap();
        let structured: FilterInput = serde_json::from_str(r#"{"available":true}"#).unwrap();
        assert_eq!(raw.into_filter().unwrap(), structured.into_filter().unwrap());
    }

    #[test]
    fn malformed_stored_values_are_skipped() {
        let mut params = QueryState::new();
        params.append("filter.tag", "{broken");
        params.append("filter.tag", r#""sale""#);
        let decoded = product_filters_from_params(&params);
        assert_eq!(decoded.len(), 1);
        assert_eq!(decoded[0].get("tag"), Some(&json!("sale")));
    }

    #[test]
    fn unrelated_params_pass_through_untouched() {
        let params = QueryState::parse("q=boots&cursor=xyz");
        let encoded = filter_input_to_params(&color_filter("red"), &params);
        assert_eq!(encoded.get("q"), Some("boots"));
        assert_eq!(encoded.get("cursor"), Some("xyz"));
    }
}
