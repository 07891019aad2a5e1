//! API modules exposed to the frontend server functions.

pub mod storefront;
