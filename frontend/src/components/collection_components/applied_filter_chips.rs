use common::applied_filter::{AppliedFilter, applied_filter_key, applied_filter_link};
use common::query_state::QueryState;
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_navigation_icons::MdClose;


/// Removable chips, one per active filter selection. Clicking a chip
/// navigates to the URL with exactly that selection deleted.
#[component]
pub fn AppliedFilterChips(
    applied: ReadSignal<Vec<AppliedFilter>>,
    params: ReadSignal<QueryState>,
    pathname: ReadSignal<String>,
) -> Element {
    rsx! {
        div {
            style: "display: flex; align-items: center; flex-wrap: wrap; gap: 8px;",
            for (chip_key, filter) in applied().into_iter().map(|f| (applied_filter_key(&f), f)) {
                Link {
                    key: "{chip_key}",
                    to: applied_filter_link(&filter, &params.read(), &pathname.read()),
                    div {
                        style: "
                            display: flex;
                            flex-direction: row;
                            align-items: center;
                            gap: 6px;
                            padding: 2px 10px;
                            border: 1px solid rgba(0,0,0,0.3);
                            border-radius: 1000px;
                            font-size: 14px;
                            color: #1C212D;
                            background: white;
                        ",
                        span { "{filter.label}" }
                        Icon { icon: MdClose, style: "width: 14px; height: 14px; color: rgba(0,0,0,0.6);" }
                    }
                }
            }
        }
    }
}
