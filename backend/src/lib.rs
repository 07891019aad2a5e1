//! Server-side collaborators: the hosted GraphQL storefront API client.

pub mod api;
