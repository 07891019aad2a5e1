use dioxus::prelude::*;

use crate::components::navbar::Navbar;
use crate::data_definitions::url_query::UrlQuery;
use crate::pages::collection_page::CollectionPage;
use crate::pages::home_page::HomePage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]


    #[route("/")]
    HomePage {},


    #[route("/collections/:handle?:..query")]
    CollectionPage {
        handle: String,
        query: UrlQuery,
    },

}

impl Route {
    pub fn collection(handle: &str) -> Self {
        Self::CollectionPage {
            handle: handle.to_string(),
            query: UrlQuery::default(),
        }
    }
}
