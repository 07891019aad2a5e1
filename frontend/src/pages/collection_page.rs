use dioxus::prelude::*;

use common::applied_filter::applied_filters_from_params;

use crate::api::storefront_api::fetch_collection_page;
use crate::components::collection_components::applied_filter_chips::AppliedFilterChips;
use crate::components::collection_components::facet_list::FacetList;
use crate::components::collection_components::product_grid::ProductGrid;
use crate::components::collection_components::sort_menu::SortMenu;
use crate::components::error_boundary::ComponentErrorDisplay;
use crate::components::suspend_boundary::SuspendWrapper;
use crate::data_definitions::url_query::UrlQuery;


/// Collection browsing page
#[component]
pub fn CollectionPage(handle: ReadSignal<String>, query: ReadSignal<UrlQuery>) -> Element {
    rsx! {
        Title { "Marketplace: {handle}" }
        SuspendWrapper {
            CollectionView { handle, query }
        }
    }
}

#[component]
fn CollectionView(handle: ReadSignal<String>, query: ReadSignal<UrlQuery>) -> Element {
    // the URL is the single source of truth: everything below derives from
    // the route's handle + query segments
    let params = use_memo(move || query.read().0.clone());
    let pathname = use_memo(move || format!("/collections/{}", handle.read()));

    let page = use_resource(move || {
        let handle = handle.read().clone();
        let search = params.read().to_string();
        fetch_collection_page(handle, search)
    }).suspend()?.cloned();
    let page = match page {
        Err(e) => return rsx! { ComponentErrorDisplay { error_txt: format!("{:#?}", e) } },
        Ok(page) => page,
    };

    let applied = applied_filters_from_params(&params.read(), &page.facets);

    rsx! {
        div {
            id: "x-collection-page",
            style: "
                display: flex;
                flex-direction: column;
                gap: 16px;
                padding: 24px 32px;
                width: 100%;
                box-sizing: border-box;
            ",

            h1 {
                style: "font-size: 30px; font-weight: 500; color: #0F172A; margin: 0;",
                "{page.title}"
            }

            // applied chips on the left, sort menu on the right
            div {
                style: "
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    width: 100%;
                ",
                AppliedFilterChips { applied, params, pathname }
                div { style: "flex-grow: 1;" }
                SortMenu { params, pathname }
            }

            div {
                style: "
                    display: flex;
                    flex-direction: row;
                    gap: 32px;
                    width: 100%;
                ",
                div {
                    style: "width: 240px; flex-shrink: 0;",
                    FacetList { facets: page.facets.clone(), params, pathname }
                }
                div {
                    style: "flex-grow: 1;",
                    ProductGrid { products: page.products.clone() }
                }
            }
        }
    }
}
