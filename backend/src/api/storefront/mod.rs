//! Storefront GraphQL API access and response shaping.

mod client;
pub use client::storefront_graphql;

mod collection;
pub use collection::fetch_collection_page;
