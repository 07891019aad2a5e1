use common::catalog::Product;
use dioxus::prelude::*;


#[component]
pub fn ProductGrid(products: ReadSignal<Vec<Product>>) -> Element {
    rsx! {
        if products.read().is_empty() {
            div {
                style: "font-size: 18px; color: rgba(0,0,0,0.6); padding: 24px 0;",
                "No products match the current filters."
            }
        } else {
            div {
                style: "
                    display: grid;
                    grid-template-columns: repeat(auto-fill, minmax(220px, 1fr));
                    gap: 20px;
                ",
                for product in products() {
                    ProductCard { key: "{product.id}", product }
                }
            }
        }
    }
}

#[component]
fn ProductCard(product: ReadSignal<Product>) -> Element {
    let product = product.read().clone();

    let picture = match product.image.as_ref() {
        Some(image) => {
            let alt = image.alt_text.clone().unwrap_or_else(|| product.title.clone());
            rsx! {
                img {
                    src: "{image.url}",
                    alt: "{alt}",
                    style: "width: 100%; aspect-ratio: 1 / 1; object-fit: cover; border-radius: 6px;",
                }
            }
        }
        None => rsx! {
            div {
                style: "width: 100%; aspect-ratio: 1 / 1; background: #ECEEF2; border-radius: 6px;",
            }
        },
    };

    let compare_at = product.compare_at_price.as_ref().map(|money| {
        rsx! {
            span {
                style: "font-size: 13px; color: rgba(0,0,0,0.4); text-decoration: line-through;",
                "{money.amount}"
            }
        }
    });

    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: column;
                gap: 6px;
                border: 1px solid rgba(0,0,0,0.1);
                border-radius: 10px;
                padding: 12px;
                background: white;
            ",

            {picture}

            div {
                style: "font-size: 13px; color: rgba(0,0,0,0.5);",
                "{product.vendor}"
            }
            div {
                style: "font-size: 16px; font-weight: 500; color: #0F172A;",
                "{product.title}"
            }
            div {
                style: "display: flex; flex-direction: row; gap: 8px; align-items: baseline;",
                span {
                    style: "font-size: 15px; color: #1C212D;",
                    "{product.price.amount} {product.price.currency_code}"
                }
                {compare_at}
            }
        }
    }
}
