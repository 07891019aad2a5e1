//! Minimal GraphQL POST client for the hosted storefront API.

use anyhow::Context;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::json;

fn storefront_api_url() -> String {
    std::env::var("STOREFRONT_API_URL")
        .unwrap_or("http://localhost:3100/api/2024-07/graphql.json".to_string())
}

fn storefront_api_token() -> String {
    std::env::var("STOREFRONT_API_TOKEN").unwrap_or_default()
}

#[derive(Debug, Deserialize)]
struct GraphqlResponse<T> {
    data: Option<T>,
    errors: Option<Vec<GraphqlError>>,
}

#[derive(Debug, Deserialize)]
struct GraphqlError {
    message: String,
}

/// Run one GraphQL query against the storefront API and deserialize the
/// `data` payload.
pub async fn storefront_graphql<T: DeserializeOwned>(
    query: &str,
    variables: serde_json::Value,
) -> anyhow::Result<T> {
    let url = storefront_api_url();
    tracing::debug!(%url, "storefront graphql request");

    let response = reqwest::Client::new()
        .post(&url)
        .header("X-Shopify-Storefront-Access-Token", storefront_api_token())
        .json(&json!({ "query": query, "variables": variables }))
        .send()
        .await?
        .error_for_status()?;

    let body: GraphqlResponse<T> = response.json().await?;
    if let Some(errors) = body.errors {
        let messages = errors
            .into_iter()
            .map(|e| e.message)
            .collect::<Vec<_>>()
            .join("; ");
        anyhow::bail!("storefront query failed: {}", messages);
    }
    body.data.context("storefront response missing data")
}
