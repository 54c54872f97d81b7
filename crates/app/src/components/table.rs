use client::FetchStatus;
use dioxus::prelude::*;

/// Rows shown per page on every list screen.
pub const ROWS_PER_PAGE: usize = 10;

#[component]
pub fn SearchBox(mut query: Signal<String>, mut page: Signal<usize>, placeholder: String) -> Element {
    rsx! {
        input {
            class: "search-box",
            r#type: "search",
            placeholder: "{placeholder}",
            value: "{query}",
            oninput: move |evt: FormEvent| {
                query.set(evt.value());
                page.set(0);
            },
        }
    }
}

/// Previous/next controls over a filtered list of `total` rows.
#[component]
pub fn Pager(mut page: Signal<usize>, total: usize) -> Element {
    let pages = total.div_ceil(ROWS_PER_PAGE).max(1);
    let current = page();

    rsx! {
        div { class: "pager",
            button {
                disabled: current == 0,
                onclick: move |_| page.set(current.saturating_sub(1)),
                "Previous"
            }
            span { "Page {current + 1} of {pages} ({total} rows)" }
            button {
                disabled: current + 1 >= pages,
                onclick: move |_| page.set(current + 1),
                "Next"
            }
        }
    }
}

/// Loading and error indicator for a slice. `error` is empty when none.
#[component]
pub fn StatusLine(status: FetchStatus, error: String) -> Element {
    match status {
        FetchStatus::Loading => rsx! { p { class: "status-loading", "Loading..." } },
        FetchStatus::Failed if !error.is_empty() => rsx! { p { class: "status-error", "{error}" } },
        _ => rsx! {},
    }
}
