//! Debounced price range editing over the URL's single-valued price entry.

use serde_json::Value;

use crate::product_filter::{PRICE_FILTER_KEY, ProductFilter, filter_link, parse_filter_value};
use crate::query_state::{PRICE_FILTER_PARAM, QueryState};

/// Quiescence delay before an edit is committed to the URL.
pub const PRICE_RANGE_FILTER_DEBOUNCE_MS: u64 = 500;

/// Current min/max bounds stored in the URL's price entry. Absent or
/// unparseable values read as unset, never as an error.
pub fn price_bounds_from_params(params: &QueryState) -> (Option<f64>, Option<f64>) {
    let Some(raw) = params.get(PRICE_FILTER_PARAM) else {
        return (None, None);
    };
    let Ok(value) = parse_filter_value(raw) else {
        return (None, None);
    };
    (
        value.get("min").and_then(Value::as_f64),
        value.get("max").and_then(Value::as_f64),
    )
}

/// Local editor state for the two price inputs.
///
/// Keystrokes update the bounds synchronously and restart a quiescence
/// deadline; `poll` fires at most one commit per quiet window. Time is
/// passed in by the caller, so the debounce contract needs no runtime.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceRangeEditor {
    min: Option<f64>,
    max: Option<f64>,
    deadline_ms: Option<u64>,
}

impl PriceRangeEditor {
    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        PriceRangeEditor {
            min,
            max,
            deadline_ms: None,
        }
    }

    pub fn from_params(params: &QueryState) -> Self {
        let (min, max) = price_bounds_from_params(params);
        Self::new(min, max)
    }

    pub fn min(&self) -> Option<f64> {
        self.min
    }

    pub fn max(&self) -> Option<f64> {
        self.max
    }

    /// Update the lower bound and restart the quiescence timer. Non-numeric
    /// input normalizes to unset.
    pub fn set_min(&mut self, raw: &str, now_ms: u64) {
        self.min = parse_price_input(raw);
        self.deadline_ms = Some(now_ms + PRICE_RANGE_FILTER_DEBOUNCE_MS);
    }

    pub fn set_max(&mut self, raw: &str, now_ms: u64) {
        self.max = parse_price_input(raw);
        self.deadline_ms = Some(now_ms + PRICE_RANGE_FILTER_DEBOUNCE_MS);
    }

    /// Fire the pending commit once the deadline has passed. Returns `None`
    /// while still inside the quiet window or when nothing is pending.
    pub fn poll(&mut self, now_ms: u64) -> Option<PriceCommit> {
        match self.deadline_ms {
            Some(deadline) if now_ms >= deadline => {
                self.deadline_ms = None;
                Some(PriceCommit {
                    min: self.min,
                    max: self.max,
                })
            }
            _ => None,
        }
    }
}

fn parse_price_input(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|value| value.is_finite())
}

/// The bounds captured when a quiet window elapsed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceCommit {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl PriceCommit {
    /// Navigation target for this commit. Callers must pass the latest
    /// params snapshot available at commit time, not one captured at
    /// keystroke time, so concurrent sort/search changes survive.
    ///
    /// Both bounds unset removes the price entry entirely; otherwise the
    /// payload carries only the bounds that are set.
    pub fn link(&self, params: &QueryState, pathname: &str) -> String {
        if self.min.is_none() && self.max.is_none() {
            let mut params = params.clone();
            params.remove_key(PRICE_FILTER_PARAM);
            return format!("{pathname}?{params}");
        }

        let mut bounds = serde_json::Map::new();
        if let Some(min) = self.min {
            bounds.insert("min".to_string(), price_number(min));
        }
        if let Some(max) = self.max {
            bounds.insert("max".to_string(), price_number(max));
        }
        let mut filter = ProductFilter::new();
        filter.insert(PRICE_FILTER_KEY.to_string(), Value::Object(bounds));
        filter_link(&filter, params, pathname)
    }
}

// Whole amounts serialize without a fractional part, matching what a
// hand-typed `{"min":100}` URL entry contains.
fn price_number(value: f64) -> Value {
    if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        Value::from(value as i64)
    } else {
        serde_json::Number::from_f64(value)
            .map(Value::Number)
            .unwrap_or(Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rapid_edits_produce_exactly_one_commit() {
        let mut editor = PriceRangeEditor::default();
        editor.set_min("1", 0);
        editor.set_min("10", 100);
        editor.set_min("100", 200);

        assert_eq!(editor.poll(400), None);
        assert_eq!(editor.poll(699), None);
        let commit = editor.poll(700).expect("deadline passed");
        assert_eq!(commit.min, Some(100.0));
        // no queued second commit
        assert_eq!(editor.poll(1200), None);
    }

    #[test]
    fn min_and_max_within_one_window_commit_together() {
        let mut editor = PriceRangeEditor::default();
        editor.set_min("100", 0);
        editor.set_max("500", 100);

        assert_eq!(editor.poll(500), None);
        let commit = editor.poll(600).unwrap();
        let href = commit.link(&QueryState::new(), "/collections/all");
        let params = QueryState::parse(href.split('?').nth(1).unwrap());
        assert_eq!(
            params.get(PRICE_FILTER_PARAM),
            Some(r#"{"max":500,"min":100}"#)
        );
    }

    #[test]
    fn clearing_both_bounds_removes_the_price_entry() {
        let params = QueryState::parse("sort=newest");
        let mut params_with_price = params.clone();
        params_with_price.append(PRICE_FILTER_PARAM, r#"{"min":100}"#);

        let mut editor = PriceRangeEditor::from_params(&params_with_price);
        assert_eq!(editor.min(), Some(100.0));
        editor.set_min("", 0);
        let commit = editor.poll(500).unwrap();

        let href = commit.link(&params_with_price, "/collections/all");
        assert_eq!(href, "/collections/all?sort=newest");
    }

    #[test]
    fn non_numeric_input_reads_as_unset() {
        let mut editor = PriceRangeEditor::default();
        editor.set_min("abc", 0);
        editor.set_max("12", 0);
        let commit = editor.poll(500).unwrap();
        assert_eq!(commit.min, None);
        assert_eq!(commit.max, Some(12.0));
    }

    #[test]
    fn commit_uses_the_latest_params_snapshot() {
        let mut editor = PriceRangeEditor::default();
        editor.set_min("50", 0);
        let commit = editor.poll(500).unwrap();

        // a sort change landed mid-debounce; it must survive the commit
        let latest = QueryState::parse("sort=price-low-high");
        let href = commit.link(&latest, "/collections/all");
        let params = QueryState::parse(href.split('?').nth(1).unwrap());
        assert_eq!(params.get("sort"), Some("price-low-high"));
        assert_eq!(params.get(PRICE_FILTER_PARAM), Some(r#"{"min":50}"#));
    }

    #[test]
    fn fractional_bounds_keep_their_decimals() {
        let commit = PriceCommit {
            min: Some(10.5),
            max: None,
        };
        let href = commit.link(&QueryState::new(), "/c");
        let params = QueryState::parse(href.split('?').nth(1).unwrap());
        assert_eq!(params.get(PRICE_FILTER_PARAM), Some(r#"{"min":10.5}"#));
    }

    #[test]
    fn unparseable_stored_price_reads_as_unset() {
        let mut params = QueryState::new();
        params.append(PRICE_FILTER_PARAM, "not json");
        assert_eq!(price_bounds_from_params(&params), (None, None));
    }
}
