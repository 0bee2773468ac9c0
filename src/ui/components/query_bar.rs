use dioxus::prelude::*;

use crate::domain::entities::query::{Selector, WILDCARD_STATUS};
use crate::domain::entities::record::{Bound, Record};
use crate::ui::state::list_state::ListQuery;
use crate::ui::style::button_style;

/// Empty or unparsable input clears the filter.
pub fn parse_filter_input(raw: &str) -> Option<f64> {
    raw.trim()
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// `maxPrice` → `Max price`
pub fn filter_label(name: &str) -> String {
    let mut label = String::with_capacity(name.len() + 2);
    for (idx, ch) in name.chars().enumerate() {
        if idx == 0 {
            label.extend(ch.to_uppercase());
        } else if ch.is_uppercase() {
            label.push(' ');
            label.extend(ch.to_lowercase());
        } else {
            label.push(ch);
        }
    }
    label
}

fn bound_hint(bound: Bound) -> &'static str {
    match bound {
        Bound::AtMost => "≤",
        Bound::AtLeast => "≥",
    }
}

/// Search box, status selector and one input per range filter of `R`.
#[component]
pub fn QueryBar<R: Record>(list: ListQuery<R>, placeholder: String) -> Element {
    let query = list.query();
    let status = query.status.as_option().to_string();
    let filters = R::range_filters();

    rsx! {
        div {
            style: "display: flex; gap: 8px; align-items: center; padding: 8px 12px; flex-wrap: wrap;",
            input {
                r#type: "search",
                placeholder: "{placeholder}",
                value: "{query.search_term}",
                style: "flex: 1 1 200px; padding: 4px 8px; border: 1px solid var(--border); border-radius: var(--radius);",
                oninput: move |evt| list.set_search_term(evt.value()),
            }
            for filter in filters.iter() {
                label {
                    key: "{filter.name}",
                    style: "display: inline-flex; gap: 4px; align-items: center;",
                    span { "{filter_label(filter.name)} {bound_hint(filter.bound)}" }
                    input {
                        r#type: "number",
                        style: "width: 90px;",
                        value: query.filter(filter.name).map(|v| v.to_string()).unwrap_or_default(),
                        oninput: move |evt| list.set_filter(filter.name, parse_filter_input(&evt.value())),
                    }
                }
            }
            select {
                value: "{status}",
                onchange: move |evt| list.set_status(Selector::from_option(&evt.value())),
                option { value: WILDCARD_STATUS, "All" }
                for option_value in R::status_options().iter() {
                    option { key: "{option_value}", value: "{option_value}", "{option_value}" }
                }
            }
            button {
                style: button_style(false),
                disabled: query.is_unfiltered(),
                onclick: move |_| list.clear_filters(),
                "Clear"
            }
        }
    }
}
