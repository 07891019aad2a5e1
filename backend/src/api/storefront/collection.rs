//! Collection page fetching: URL state in, typed page data out.

use anyhow::Context;
use serde::Deserialize;
use serde_json::{Value, json};

use common::catalog::{CollectionPage, Image, Money, PageInfo, Product};
use common::facet::Facet;
use common::product_filter::product_filters_from_params;
use common::query_state::QueryState;
use common::sort_param::SortParam;

const PAGE_SIZE: u32 = 24;

const COLLECTION_QUERY: &str = r#"
query CollectionPage(
  $handle: String!
  $filters: [ProductFilter!]
  $sortKey: ProductCollectionSortKeys!
  $reverse: Boolean
  $first: Int!
  $after: String
) {
  collection(handle: $handle) {
    handle
    title
    products(
      filters: $filters
      sortKey: $sortKey
      reverse: $reverse
      first: $first
      after: $after
    ) {
      filters {
        id
        label
        type
        values {
          id
          label
          count
          input
        }
      }
      nodes {
        id
        handle
        title
        vendor
        priceRange {
          minVariantPrice {
            amount
            currencyCode
          }
        }
        compareAtPriceRange {
          minVariantPrice {
            amount
            currencyCode
          }
        }
        featuredImage {
          url
          altText
        }
      }
      pageInfo {
        hasNextPage
        hasPreviousPage
        startCursor
        endCursor
      }
    }
  }
}
"#;

/// Fetch one collection page. The raw search string is decoded through the
/// shared codec: namespaced filter params become `productFilters`, the
/// `sort` key picks the API sort, and the pagination cursor passes through.
pub async fn fetch_collection_page(handle: String, search: String) -> anyhow::Result<CollectionPage> {
    let params = QueryState::parse(&search);

    let filters: Vec<Value> = product_filters_from_params(&params)
        .into_iter()
        .map(Value::Object)
        .collect();
    let (sort_key, reverse) = SortParam::from_params(&params).collection_sort();
    let cursor = params.get("cursor").map(|c| c.to_string());

    let variables = json!({
        "handle": handle,
        "filters": filters,
        "sortKey": sort_key.as_str(),
        "reverse": reverse,
        "first": PAGE_SIZE,
        "after": cursor,
    });

    let data: CollectionQueryData =
        super::storefront_graphql(COLLECTION_QUERY, variables).await?;
    let collection = data
        .collection
        .with_context(|| format!("collection not found: {}", handle))?;

    Ok(CollectionPage {
        handle: collection.handle,
        title: collection.title,
        facets: collection.products.filters,
        products: collection
            .products
            .nodes
            .into_iter()
            .map(shape_product)
            .collect(),
        page_info: PageInfo {
            has_next_page: collection.products.page_info.has_next_page,
            has_previous_page: collection.products.page_info.has_previous_page,
            start_cursor: collection.products.page_info.start_cursor,
            end_cursor: collection.products.page_info.end_cursor,
        },
    })
}

fn shape_product(raw: RawProduct) -> Product {
    Product {
        id: raw.id,
        handle: raw.handle,
        title: raw.title,
        vendor: raw.vendor,
        price: shape_money(raw.price_range.min_variant_price),
        compare_at_price: raw
            .compare_at_price_range
            .map(|range| shape_money(range.min_variant_price)),
        image: raw.featured_image.map(|image| Image {
            url: image.url,
            alt_text: image.alt_text,
        }),
    }
}

fn shape_money(raw: RawMoney) -> Money {
    Money {
        amount: raw.amount,
        currency_code: raw.currency_code,
    }
}

#[derive(Debug, Deserialize)]
struct CollectionQueryData {
    collection: Option<RawCollection>,
}

#[derive(Debug, Deserialize)]
struct RawCollection {
    handle: String,
    title: String,
    products: RawProductConnection,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawProductConnection {
    // facet catalog entries deserialize straight into the shared type;
    // the untagged FilterInput absorbs the stringified `input` values
    filters: Vec<Facet>,
    nodes: Vec<RawProduct>,
    page_info: RawPageInfo,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawProduct {
    id: String,
    handle: String,
    title: String,
    vendor: String,
    price_range: RawPriceRange,
    compare_at_price_range: Option<RawPriceRange>,
    featured_image: Option<RawImage>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPriceRange {
    min_variant_price: RawMoney,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawMoney {
    amount: String,
    currency_code: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawImage {
    url: String,
    alt_text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPageInfo {
    has_next_page: bool,
    has_previous_page: bool,
    start_cursor: Option<String>,
    end_cursor: Option<String>,
}
