use common::price_range::{PRICE_RANGE_FILTER_DEBOUNCE_MS, PriceRangeEditor};
use common::query_state::QueryState;
use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;


fn now_ms() -> u64 {
    web_sys::window()
        .and_then(|window| window.performance())
        .map(|performance| performance.now() as u64)
        .unwrap_or(0)
}

/// Debounced min/max price inputs. Keystrokes update the local editor
/// immediately; the URL only changes once the quiescence window elapses.
#[component]
pub fn PriceRangeFilter(
    min: ReadSignal<Option<f64>>,
    max: ReadSignal<Option<f64>>,
    params: ReadSignal<QueryState>,
    pathname: ReadSignal<String>,
) -> Element {
    let mut editor = use_signal(move || PriceRangeEditor::new(min(), max()));
    // bumping this cancels any commit still waiting on its timer
    let mut generation = use_signal(|| 0_u64);

    // resync when the URL's price entry changes from outside, e.g. a chip
    // removal clearing the filter
    use_effect(move || {
        let bounds = PriceRangeEditor::new(min(), max());
        let stale = {
            let current = editor.peek();
            current.min() != bounds.min() || current.max() != bounds.max()
        };
        if stale {
            editor.set(bounds);
        }
    });

    let schedule_commit = Callback::new(move |()| {
        let pending = generation() + 1;
        generation.set(pending);
        spawn(async move {
            TimeoutFuture::new(PRICE_RANGE_FILTER_DEBOUNCE_MS as u32).await;
            if *generation.peek() != pending {
                // a newer keystroke restarted the window
                return;
            }
            let commit = editor.write().poll(now_ms());
            if let Some(commit) = commit {
                // latest URL snapshot, not the one from keystroke time
                let href = commit.link(&params.peek(), &pathname.peek());
                navigator().push(href);
            }
        });
    });

    let min_value = use_memo(move || {
        editor.read().min().map(|v| v.to_string()).unwrap_or_default()
    });
    let max_value = use_memo(move || {
        editor.read().max().map(|v| v.to_string()).unwrap_or_default()
    });

    rsx! {
        div {
            style: "display: flex; flex-direction: row; gap: 8px; padding: 4px 0 8px 0;",
            label {
                style: "display: flex; flex-direction: column; font-size: 13px; color: #1C212D;",
                span { "From" }
                input {
                    name: "minPrice",
                    r#type: "number",
                    placeholder: "$",
                    style: "width: 90px; padding: 4px; color: black;",
                    value: "{min_value}",
                    oninput: move |event| {
                        editor.write().set_min(&event.value(), now_ms());
                        schedule_commit(());
                    },
                }
            }
            label {
                style: "display: flex; flex-direction: column; font-size: 13px; color: #1C212D;",
                span { "To" }
                input {
                    name: "maxPrice",
                    r#type: "number",
                    placeholder: "$",
                    style: "width: 90px; padding: 4px; color: black;",
                    value: "{max_value}",
                    oninput: move |event| {
                        editor.write().set_max(&event.value(), now_ms());
                        schedule_commit(());
                    },
                }
            }
        }
    }
}
