//! Ordered URL query-string multimap shared by all filter/sort logic.

use std::fmt::Display;
use std::str::FromStr;

use url::form_urlencoded;

/// Prefix for all filter parameters, keeping them apart from `sort`,
/// free-text search and pagination keys.
pub const FILTER_URL_PREFIX: &str = "filter.";

/// Bare query key holding the current sort order.
pub const SORT_PARAM_KEY: &str = "sort";

/// Full query key of the single-valued price filter.
pub const PRICE_FILTER_PARAM: &str = "filter.price";

/// Ordered multimap of query-string pairs.
///
/// Keys may repeat (multi-select filters append one pair per selection).
/// All operations preserve the relative order of pairs they do not
/// explicitly remove.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryState {
    pairs: Vec<(String, String)>,
}

impl QueryState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a raw search string. A leading `?` is tolerated.
    pub fn parse(search: &str) -> Self {
        let search = search.strip_prefix('?').unwrap_or(search);
        QueryState {
            pairs: form_urlencoded::parse(search.as_bytes())
                .into_owned()
                .collect(),
        }
    }

    /// First value stored under `key`, if any.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// All values stored under `key`, in order.
    pub fn get_all(&self, key: &str) -> Vec<&str> {
        self.pairs
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    /// Whether the exact `(key, value)` pair is present. This is the
    /// equality rule behind both encode idempotency and active-option
    /// detection.
    pub fn contains_pair(&self, key: &str, value: &str) -> bool {
        self.pairs.iter().any(|(k, v)| k == key && v == value)
    }

    /// Append a new pair, keeping existing pairs under the same key.
    pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((key.into(), value.into()));
    }

    /// Overwrite `key` with a single value: the first occurrence is
    /// replaced in place, later duplicates are dropped, and the pair is
    /// appended when the key was absent.
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        let mut value = Some(value.into());
        self.pairs.retain_mut(|(k, v)| {
            if k != key {
                return true;
            }
            match value.take() {
                Some(new_value) => {
                    *v = new_value;
                    true
                }
                None => false,
            }
        });
        if let Some(value) = value {
            self.pairs.push((key.to_string(), value));
        }
    }

    /// Remove every pair matching both `key` and `value`. Removing a pair
    /// that is not present is a silent no-op.
    pub fn remove_pair(&mut self, key: &str, value: &str) {
        self.pairs.retain(|(k, v)| !(k == key && v == value));
    }

    /// Remove every pair under `key`.
    pub fn remove_key(&mut self, key: &str) {
        self.pairs.retain(|(k, _)| k != key);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }
}

// Display writes the percent-encoded search string (without a leading `?`),
// in a form that parse() round-trips.
impl Display for QueryState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in &self.pairs {
            serializer.append_pair(key, value);
        }
        write!(f, "{}", serializer.finish())
    }
}

impl FromStr for QueryState {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(QueryState::parse(s))
    }
}

impl FromIterator<(String, String)> for QueryState {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        QueryState {
            pairs: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(state: &QueryState) -> Vec<(String, String)> {
        state
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn parse_and_display_round_trip() {
        let state = QueryState::parse("?q=red%20shoes&sort=newest&cursor=abc%3D%3D");
        assert_eq!(state.get("q"), Some("red shoes"));
        assert_eq!(state.get("sort"), Some("newest"));
        assert_eq!(state.get("cursor"), Some("abc=="));
        let reparsed = QueryState::parse(&state.to_string());
        assert_eq!(reparsed, state);
    }

    #[test]
    fn append_keeps_multiple_values_in_order() {
        let mut state = QueryState::new();
        state.append("filter.tag", "a");
        state.append("sort", "newest");
        state.append("filter.tag", "b");
        assert_eq!(state.get_all("filter.tag"), vec!["a", "b"]);
        assert_eq!(state.get("filter.tag"), Some("a"));
    }

    #[test]
    fn set_replaces_in_place_and_drops_duplicates() {
        let mut state = QueryState::new();
        state.append("filter.price", "old");
        state.append("q", "shoes");
        state.append("filter.price", "older");
        state.set("filter.price", "new");
        assert_eq!(
            pairs(&state),
            vec![
                ("filter.price".to_string(), "new".to_string()),
                ("q".to_string(), "shoes".to_string()),
            ]
        );
    }

    #[test]
    fn set_appends_when_key_absent() {
        let mut state = QueryState::parse("q=shoes");
        state.set("sort", "featured");
        assert_eq!(state.to_string(), "q=shoes&sort=featured");
    }

    #[test]
    fn remove_pair_only_touches_the_exact_pair() {
        let mut state = QueryState::new();
        state.append("filter.tag", "a");
        state.append("q", "shoes");
        state.append("filter.tag", "b");
        state.remove_pair("filter.tag", "a");
        assert_eq!(
            pairs(&state),
            vec![
                ("q".to_string(), "shoes".to_string()),
                ("filter.tag".to_string(), "b".to_string()),
            ]
        );
    }

    #[test]
    fn remove_pair_on_missing_value_is_a_no_op() {
        let mut state = QueryState::parse("q=shoes&sort=newest");
        let before = state.clone();
        state.remove_pair("filter.tag", "gone");
        assert_eq!(state, before);
    }

    #[test]
    fn add_then_remove_restores_original_order() {
        let original = QueryState::parse("q=shoes&filter.tag=a&sort=newest");
        let mut state = original.clone();
        state.append("filter.tag", "b");
        state.remove_pair("filter.tag", "b");
        assert_eq!(state, original);
    }
}
