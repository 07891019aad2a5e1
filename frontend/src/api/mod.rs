pub mod storefront_api;
