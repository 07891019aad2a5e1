//! Top navigation bar component.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_action_icons::{MdHome, MdShoppingCart};

use crate::components::error_boundary::GlobalErrorBoundary;
use crate::routes::Route;


/// Shared navbar component.
#[component]
pub fn Navbar() -> Element {
    rsx! {
        div {
            id: "x-nav-container",
            style: "
                display:flex;
                flex-direction: column;
                width: 100%;
                height: 100%;
            ",

            div {
                id: "x-nav-top-bar",
                style: "
                    display:flex;
                    flex-direction: row;
                    align-items: center;
                    gap: 24px;
                    height: 56px;
                    padding: 0 24px;
                    background-color: #1C212D;
                    color: white;
                    flex-shrink: 0;
                ",

                Link {
                    to: Route::HomePage {},
                    span {
                        style: "color:white; font-size: 20px; font-weight: 500; letter-spacing: 0.02em;",
                        "Marketplace"
                    }
                }

                Link {
                    to: Route::HomePage {},
                    span {
                        style: "color:white; display:flex; align-items:center; gap:6px;",
                        Icon { icon: MdHome, style: "width: 22px; height: 22px;" }
                        "Home"
                    }
                }

                Link {
                    to: Route::collection("all"),
                    span {
                        style: "color:white;",
                        "Shop All"
                    }
                }

                // empty space
                div {
                    style: "flex-grow:1;"
                }

                span {
                    style: "color:white;",
                    Icon { icon: MdShoppingCart, style: "width: 22px; height: 22px;" }
                }
            },

            div {
                id: "x-page-container",
                style: "flex-grow:1; min-height: 100px; overflow: auto;",
                GlobalErrorBoundary {
                    boundary_name: "Navbar".to_string(),
                    Outlet::<Route> {}
                }
            }
        }
    }
}
