//! Filter, sort and product list components for the collection page.

pub mod applied_filter_chips;
pub mod facet_list;
pub mod price_range_filter;
pub mod product_grid;
pub mod sort_menu;
