use dioxus::prelude::*;

use crate::routes::Route;


/// Home page
#[component]
pub fn HomePage() -> Element {
    rsx! {
        Title { "Marketplace - Home" }
        div {
            id: "x-home-container",
            style: "
                display:flex;
                flex-direction: column;
                gap: 20px;
                width: 100%;
                height: 100%;
                padding: 36px 40px;
                background: #F5F6F8;
                box-sizing: border-box;
                overflow: auto;
            ",

            div {
                style: "
                    color: #0F172A;
                    font-size: 42px;
                    font-weight: 500;
                    letter-spacing: -0.02em;
                ",
                "Welcome to the shop"
            }

            div {
                style: "
                    color: #111827;
                    font-size: 22px;
                    line-height: 1.6;
                    max-width: 620px;
                ",
                "Browse the catalog, narrow it down with filters and find what you came for."
            }

            div {
                style: "
                    display:flex;
                    flex-direction: row;
                    gap: 20px;
                    flex-wrap: wrap;
                    margin-top: 10px;
                ",
                CollectionCard {
                    handle: "all".to_string(),
                    title: "Shop All".to_string(),
                    blurb: "Every product in the store, with the full filter sidebar.".to_string(),
                }
                CollectionCard {
                    handle: "featured".to_string(),
                    title: "Featured".to_string(),
                    blurb: "Hand-picked items from the current season.".to_string(),
                }
            }
        }
    }
}

#[component]
fn CollectionCard(handle: ReadSignal<String>, title: ReadSignal<String>, blurb: ReadSignal<String>) -> Element {
    rsx! {
        Link {
            to: Route::collection(&handle.read()),
            div {
                style: "
                    display:flex;
                    flex-direction: column;
                    gap: 12px;
                    width: 380px;
                    min-height: 160px;
                    border-radius: 16px;
                    padding: 22px;
                    background: linear-gradient(135deg, #2D208A 0%, #5B3DF5 100%);
                    color: white;
                    box-shadow: 0 8px 24px rgba(0,0,0,0.12);
                ",
                div {
                    style: "font-size: 26px; font-weight: 500;",
                    "{title}"
                }
                div {
                    style: "font-size: 17px; line-height: 1.5; color: rgba(255,255,255,0.92);",
                    "{blurb}"
                }
            }
        }
    }
}
