//! Client API calls for storefront endpoints.

use common::catalog::CollectionPage;
use dioxus::prelude::*;




#[server]
pub async fn fetch_collection_page(handle: String, search: String) -> Result<CollectionPage, ServerFnError> {
    let x = backend::api::storefront::fetch_collection_page(handle, search).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}
