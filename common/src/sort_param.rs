//! Sort order selection, stored under the bare `sort` query key.

use serde::{Deserialize, Serialize};

use crate::query_state::{QueryState, SORT_PARAM_KEY};

/// Closed enumeration of sort orders offered by the sort menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortParam {
    Featured,
    PriceLowHigh,
    PriceHighLow,
    BestSelling,
    Newest,
}

impl SortParam {
    /// Menu order. The first entry doubles as the fallback for a missing
    /// or unknown `sort` value.
    pub const ALL: [SortParam; 5] = [
        SortParam::Featured,
        SortParam::PriceLowHigh,
        SortParam::PriceHighLow,
        SortParam::BestSelling,
        SortParam::Newest,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortParam::Featured => "featured",
            SortParam::PriceLowHigh => "price-low-high",
            SortParam::PriceHighLow => "price-high-low",
            SortParam::BestSelling => "best-selling",
            SortParam::Newest => "newest",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortParam::Featured => "Featured",
            SortParam::PriceLowHigh => "Price: Low - High",
            SortParam::PriceHighLow => "Price: High - Low",
            SortParam::BestSelling => "Best Selling",
            SortParam::Newest => "Newest",
        }
    }

    /// Active sort from the current params, defaulting to the first entry.
    pub fn from_params(params: &QueryState) -> SortParam {
        params
            .get(SORT_PARAM_KEY)
            .and_then(|raw| Self::ALL.iter().copied().find(|sort| sort.as_str() == raw))
            .unwrap_or(Self::ALL[0])
    }

    /// Storefront API sort key and reverse flag for the collection query.
    pub fn collection_sort(&self) -> (CollectionSortKey, bool) {
        match self {
            SortParam::Featured => (CollectionSortKey::Manual, false),
            SortParam::PriceLowHigh => (CollectionSortKey::Price, false),
            SortParam::PriceHighLow => (CollectionSortKey::Price, true),
            SortParam::BestSelling => (CollectionSortKey::BestSelling, false),
            SortParam::Newest => (CollectionSortKey::Created, true),
        }
    }
}

/// Pure overwrite of the single `sort` key; every other param untouched.
pub fn sort_link(sort: SortParam, params: &QueryState, pathname: &str) -> String {
    let mut params = params.clone();
    params.set(SORT_PARAM_KEY, sort.as_str());
    format!("{pathname}?{params}")
}

/// Sort keys accepted by the storefront collection products query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CollectionSortKey {
    CollectionDefault,
    Title,
    Price,
    BestSelling,
    Created,
    Manual,
    Relevance,
}

impl CollectionSortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            CollectionSortKey::CollectionDefault => "COLLECTION_DEFAULT",
            CollectionSortKey::Title => "TITLE",
            CollectionSortKey::Price => "PRICE",
            CollectionSortKey::BestSelling => "BEST_SELLING",
            CollectionSortKey::Created => "CREATED",
            CollectionSortKey::Manual => "MANUAL",
            CollectionSortKey::Relevance => "RELEVANCE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_link_overwrites_the_single_sort_key() {
        let params = QueryState::parse("q=boots&sort=newest&filter.tag=%22sale%22");
        let href = sort_link(SortParam::PriceLowHigh, &params, "/collections/all");
        let after = QueryState::parse(href.split('?').nth(1).unwrap());
        assert_eq!(after.get_all("sort"), vec!["price-low-high"]);
        assert_eq!(after.get("q"), Some("boots"));
        assert_eq!(after.get("filter.tag"), Some("\"sale\""));
    }

    #[test]
    fn missing_or_unknown_sort_falls_back_to_featured() {
        assert_eq!(
            SortParam::from_params(&QueryState::new()),
            SortParam::Featured
        );
        let params = QueryState::parse("sort=bogus");
        assert_eq!(SortParam::from_params(&params), SortParam::Featured);
    }

    #[test]
    fn wire_form_round_trips() {
        for sort in SortParam::ALL {
            let params = QueryState::parse(&format!("sort={}", sort.as_str()));
            assert_eq!(SortParam::from_params(&params), sort);
        }
    }

    #[test]
    fn newest_maps_to_reversed_created() {
        assert_eq!(
            SortParam::Newest.collection_sort(),
            (CollectionSortKey::Created, true)
        );
    }
}
