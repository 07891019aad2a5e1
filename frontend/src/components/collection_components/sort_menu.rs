use common::query_state::QueryState;
use common::sort_param::{SortParam, sort_link};
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_navigation_icons::MdArrowDropDown;


/// Sort order dropdown. Every entry is a plain link that overwrites the
/// single `sort` key; the active entry falls back to the first one when
/// the URL has no recognizable sort value.
#[component]
pub fn SortMenu(params: ReadSignal<QueryState>, pathname: ReadSignal<String>) -> Element {
    let mut open = use_signal(|| false);
    let active = use_memo(move || SortParam::from_params(&params.read()));

    rsx! {
        div {
            style: "position: relative; flex-shrink: 0;",

            button {
                style: "
                    display: flex;
                    align-items: center;
                    gap: 4px;
                    padding: 4px 8px;
                    background: white;
                    border: none;
                    border-radius: 6px;
                    cursor: pointer;
                    font-size: 15px;
                    color: #1C212D;
                ",
                onclick: move |_| {
                    let toggled = !open();
                    open.set(toggled);
                },
                span { style: "font-weight: 500;", "Sort by:" }
                span { "{active().label()}" }
                Icon { icon: MdArrowDropDown, style: "width: 20px; height: 20px; color: rgba(0,0,0,0.7);" }
            }

            if open() {
                nav {
                    style: "
                        position: absolute;
                        right: 0;
                        display: flex;
                        flex-direction: column;
                        gap: 6px;
                        padding: 12px;
                        text-align: right;
                        background: white;
                        border: 1px solid rgba(0,0,0,0.2);
                        border-radius: 6px;
                        box-shadow: 0 0 10px 0 rgba(0,0,0,0.1);
                        z-index: 100;
                    ",
                    for item in SortParam::ALL {
                        Link {
                            key: "{item.as_str()}",
                            to: sort_link(item, &params.read(), &pathname.read()),
                            onclick: move |_| open.set(false),
                            span {
                                style: if active() == item {
                                    "font-size: 14px; font-weight: 700; color: #1C212D;"
                                } else {
                                    "font-size: 14px; font-weight: 400; color: #1C212D;"
                                },
                                "{item.label()}"
                            }
                        }
                    }
                }
            }
        }
    }
}
