//! Typed collection page data shared between frontend and backend.

use serde::{Deserialize, Serialize};

use crate::facet::Facet;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Money {
    /// Decimal amount as a string, preserving precision.
    pub amount: String,
    pub currency_code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    pub url: String,
    pub alt_text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub handle: String,
    pub title: String,
    pub vendor: String,
    pub price: Money,
    pub compare_at_price: Option<Money>,
    pub image: Option<Image>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageInfo {
    pub has_next_page: bool,
    pub has_previous_page: bool,
    pub start_cursor: Option<String>,
    pub end_cursor: Option<String>,
}

/// Everything the collection page needs from one storefront query: the
/// facet catalog, the product page and its pagination cursors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionPage {
    pub handle: String,
    pub title: String,
    pub facets: Vec<Facet>,
    pub products: Vec<Product>,
    pub page_info: PageInfo,
}
