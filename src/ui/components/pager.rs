use dioxus::prelude::*;

use crate::domain::entities::record::Record;
use crate::ui::state::list_state::ListQuery;
use crate::ui::style::button_style;
use crate::usecase::services::projector::page_window;

pub const PAGE_SIZE_OPTIONS: [usize; 4] = [5, 10, 20, 50];

/// "Showing a–b of n" for the current page.
pub fn range_label(current_page: usize, page_size: usize, shown: usize, total: usize) -> String {
    if total == 0 || shown == 0 {
        return "No results".to_string();
    }
    let first = current_page * page_size + 1;
    let last = first + shown - 1;
    format!("Showing {first}–{last} of {total}")
}

#[component]
pub fn Pager<R: Record>(list: ListQuery<R>, shown: usize) -> Element {
    let pagination = list.pagination();
    let current = pagination.current_page;
    let window = page_window(&pagination);
    let label = range_label(
        current,
        pagination.page_size,
        shown,
        pagination.total_elements,
    );
    let has_prev = current > 0;
    let has_next = current + 1 < pagination.total_pages;

    rsx! {
        div {
            style: "display: flex; align-items: center; gap: 6px; padding: 8px 12px; flex-wrap: wrap;",
            span { style: "margin-right: auto;", "{label}" }
            button {
                style: button_style(false),
                disabled: !has_prev,
                onclick: move |_| list.set_page(current.saturating_sub(1)),
                "‹"
            }
            for (idx, entry) in window.into_iter().enumerate() {
                {match entry {
                    Some(page) => rsx! {
                        button {
                            key: "page-{page}",
                            style: button_style(page == current),
                            onclick: move |_| list.set_page(page),
                            "{page + 1}"
                        }
                    },
                    None => rsx! {
                        span { key: "gap-{idx}", "…" }
                    },
                }}
            }
            button {
                style: button_style(false),
                disabled: !has_next,
                onclick: move |_| list.set_page(current + 1),
                "›"
            }
            select {
                value: "{pagination.page_size}",
                onchange: move |evt| {
                    if let Ok(size) = evt.value().parse::<usize>() {
                        list.set_page_size(size);
                    }
                },
                for size in PAGE_SIZE_OPTIONS {
                    option { key: "{size}", value: "{size}", "{size} / page" }
                }
            }
        }
    }
}
