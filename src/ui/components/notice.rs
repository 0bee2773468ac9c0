use dioxus::prelude::*;

use crate::domain::entities::record::Record;
use crate::ui::state::list_state::ListQuery;
use crate::ui::style::button_style;
use crate::usecase::services::list_query::Phase;

/// Loading indicator and fetch error banner with a retry button.
#[component]
pub fn ListNotice<R: Record>(list: ListQuery<R>) -> Element {
    let phase = list.phase();
    let message = list.error_message();

    rsx! {
        if phase == Phase::Loading {
            div { style: "padding: 6px 12px; opacity: 0.7;", "Loading…" }
        }
        if let Some(message) = message {
            div {
                style: "margin: 6px 12px; padding: 8px 12px; border-radius: var(--radius); background: #fdecea; color: #8a1c12; display: flex; gap: 12px; align-items: center;",
                span { "Could not load data: {message}" }
                button {
                    style: button_style(false),
                    onclick: move |_| list.retry(),
                    "Retry"
                }
            }
        }
    }
}

#[component]
pub fn EmptyState(message: String) -> Element {
    rsx! {
        div { style: "padding: 24px; text-align: center; opacity: 0.7;", "{message}" }
    }
}
