use std::collections::HashSet;

use common::facet::{Facet, RenderedFacet, RenderedFacetBody, RenderedOption, render_facets};
use common::query_state::QueryState;
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_navigation_icons::MdArrowDropDown;
use dioxus_free_icons::icons::md_toggle_icons::{MdCheckBox, MdCheckBoxOutlineBlank};

use crate::components::collection_components::price_range_filter::PriceRangeFilter;


#[component]
pub fn FacetList(facets: ReadSignal<Vec<Facet>>, params: ReadSignal<QueryState>, pathname: ReadSignal<String>) -> Element {
    let rendered = use_memo(move || render_facets(&facets.read(), &params.read(), &pathname.read()));
    // incidental disclosure state: facets start open, collapsed ids collect here
    let collapsed = use_signal(HashSet::<String>::new);

    rsx! {
        nav {
            style: "display: flex; flex-direction: column; padding: 8px 0;",
            h4 {
                style: "font-size: 19px; font-weight: 500; color: #0F172A; margin: 0 0 12px 0;",
                "Filter by"
            }
            for facet in rendered() {
                FacetDisclosure {
                    key: "{facet.id}",
                    facet,
                    collapsed,
                    params,
                    pathname,
                }
            }
        }
    }
}

#[component]
fn FacetDisclosure(
    facet: ReadSignal<RenderedFacet>,
    collapsed: Signal<HashSet<String>>,
    params: ReadSignal<QueryState>,
    pathname: ReadSignal<String>,
) -> Element {
    let is_open = use_memo(move || !collapsed.read().contains(&facet.read().id));
    let caret = use_memo(move || if is_open() { "rotate(180deg)" } else { "rotate(0deg)" });

    let body = match facet.read().body.clone() {
        RenderedFacetBody::PriceRange { min, max } => rsx! {
            PriceRangeFilter { min, max, params, pathname }
        },
        RenderedFacetBody::Options(options) => rsx! {
            ul {
                style: "list-style: none; margin: 0; padding: 4px 0;",
                for option in options {
                    li {
                        key: "{option.id}",
                        style: "padding-bottom: 6px;",
                        FacetOptionRow { option }
                    }
                }
            }
        },
    };

    rsx! {
        div {
            style: "border-top: 1px solid rgba(0,0,0,0.1); padding: 6px 0; width: 100%;",

            button {
                style: "
                    display: flex;
                    flex-direction: row;
                    justify-content: space-between;
                    align-items: center;
                    width: 100%;
                    padding: 4px 0;
                    background: none;
                    border: none;
                    cursor: pointer;
                    font-size: 17px;
                    color: #1C212D;
                ",
                onclick: move |_| {
                    let id = facet.read().id.clone();
                    let mut collapsed = collapsed;
                    let mut set = collapsed.write();
                    if !set.remove(&id) {
                        set.insert(id);
                    }
                },
                span { "{facet.read().label}" }
                span {
                    style: "transform: {caret()}; display: flex;",
                    Icon { icon: MdArrowDropDown, style: "width: 20px; height: 20px; color: rgba(0,0,0,0.7);" }
                }
            }

            if is_open() {
                {body}
            }
        }
    }
}

#[component]
fn FacetOptionRow(option: ReadSignal<RenderedOption>) -> Element {
    let option = option.read().clone();
    rsx! {
        Link {
            to: option.href.clone(),
            div {
                style: "
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    gap: 8px;
                    cursor: pointer;
                    color: #1C212D;
                ",
                if option.is_active {
                    Icon { icon: MdCheckBox, style: "width: 20px; height: 20px; color: rgb(28, 33, 45); flex-shrink: 0;" }
                } else {
                    Icon { icon: MdCheckBoxOutlineBlank, style: "width: 20px; height: 20px; color: black; flex-shrink: 0;" }
                }
                span {
                    style: "font-size: 15px; overflow: hidden; text-overflow: ellipsis; white-space: nowrap;",
                    "{option.label}"
                }
                span {
                    style: "font-size: 13px; color: rgba(28, 33, 45, 0.6); flex-shrink: 0;",
                    "({option.count})"
                }
            }
        }
    }
}
