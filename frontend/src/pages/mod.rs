pub mod collection_page;
pub mod home_page;
