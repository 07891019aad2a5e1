//! Facet catalog types and the render model for the filter sidebar.

use serde::{Deserialize, Serialize};

use crate::applied_filter::{AppliedFilter, applied_filter_link};
use crate::price_range::price_bounds_from_params;
use crate::product_filter::{FilterInput, filter_link};
use crate::query_state::{FILTER_URL_PREFIX, QueryState};

/// Facet kind as delivered by the storefront API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FacetType {
    PriceRange,
    List,
    Boolean,
}

/// One filterable dimension of the catalog. Read-only in this subsystem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Facet {
    pub id: String,
    pub label: String,
    #[serde(rename = "type")]
    pub facet_type: FacetType,
    // the storefront API wire form carries options under `values`
    #[serde(alias = "values")]
    pub options: Vec<FacetOption>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacetOption {
    pub id: String,
    pub label: String,
    pub count: u64,
    pub input: FilterInput,
}

// Fixed display priority: price, then boolean facets (availability), then
// list facets. Stable within each class, so catalog order breaks ties.
fn facet_priority(facet_type: FacetType) -> u8 {
    match facet_type {
        FacetType::PriceRange => 0,
        FacetType::Boolean => 1,
        FacetType::List => 2,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderedFacet {
    pub id: String,
    pub label: String,
    pub body: RenderedFacetBody,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RenderedFacetBody {
    /// Delegates to the price range editor; bounds come from the URL's
    /// price entry, unset when absent or unparseable.
    PriceRange { min: Option<f64>, max: Option<f64> },
    Options(Vec<RenderedOption>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderedOption {
    pub id: String,
    pub label: String,
    pub count: u64,
    pub is_active: bool,
    /// Toggle target: the removal link when active, the addition link
    /// otherwise.
    pub href: String,
}

/// Build the full sidebar render model from the catalog and the current
/// params. Pure: never mutates URL state, only computes links.
pub fn render_facets(facets: &[Facet], params: &QueryState, pathname: &str) -> Vec<RenderedFacet> {
    let mut ordered: Vec<&Facet> = facets.iter().collect();
    ordered.sort_by_key(|facet| facet_priority(facet.facet_type));

    ordered
        .into_iter()
        .map(|facet| RenderedFacet {
            id: facet.id.clone(),
            label: facet.label.clone(),
            body: match facet.facet_type {
                FacetType::PriceRange => {
                    let (min, max) = price_bounds_from_params(params);
                    RenderedFacetBody::PriceRange { min, max }
                }
                FacetType::List | FacetType::Boolean => {
                    RenderedFacetBody::Options(render_options(facet, params, pathname))
                }
            },
        })
        .collect()
}

fn render_options(facet: &Facet, params: &QueryState, pathname: &str) -> Vec<RenderedOption> {
    let mut rendered = Vec::with_capacity(facet.options.len());
    for option in &facet.options {
        let filter = match option.input.clone().into_filter() {
            Ok(filter) => filter,
            Err(err) => {
                tracing::warn!("skipping facet option {}: {}", option.id, err);
                continue;
            }
        };

        let encoded_pairs: Vec<(String, String)> = filter
            .iter()
            .map(|(key, value)| (format!("{FILTER_URL_PREFIX}{key}"), value.to_string()))
            .collect();
        let is_active = !encoded_pairs.is_empty()
            && encoded_pairs
                .iter()
                .all(|(key, value)| params.contains_pair(key, value));

        let href = if is_active {
            let applied = AppliedFilter {
                label: option.label.clone(),
                filter,
            };
            applied_filter_link(&applied, params, pathname)
        } else {
            filter_link(&filter, params, pathname)
        };

        rendered.push(RenderedOption {
            id: option.id.clone(),
            label: option.label.clone(),
            count: option.count,
            is_active,
            href,
        });
    }
    rendered
}
