//! Raw query-string route segment.

use std::fmt::Display;

use common::query_state::QueryState;

/// The collection page's query string, carried through the router as the
/// ordered multimap the filter/sort logic works on. `From<&str>` is what
/// the router's query-segment parsing hooks into; `Display` writes the
/// percent-encoded form back into generated links.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UrlQuery(pub QueryState);

impl Display for UrlQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for UrlQuery {
    fn from(query: &str) -> Self {
        UrlQuery(QueryState::parse(query))
    }
}
