//! Shared filter/sort URL-state model used by frontend and backend.
//!
//! The URL query string is the single source of truth: everything here is
//! a pure function from explicit query state to new state or link strings.

extern crate serde;


pub mod query_state;
pub mod product_filter;
pub mod applied_filter;
pub mod facet;
pub mod price_range;
pub mod sort_param;
pub mod catalog;
