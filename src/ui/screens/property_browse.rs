use dioxus::prelude::*;

use crate::config::AppConfig;
use crate::domain::entities::page::FetchMode;
use crate::domain::entities::property::Property;
use crate::domain::entities::record::Record;
use crate::ui::components::notice::{EmptyState, ListNotice};
use crate::ui::components::query_bar::QueryBar;
use crate::ui::components::sentinel::Sentinel;
use crate::ui::state::list_state::use_list_query;
use crate::ui::state::sources::Sources;
use crate::ui::style::{button_style, card_style, grid_style, status_badge_style};

/// Property catalogue for seekers: pages accumulate as the grid scrolls.
#[component]
pub fn PropertyBrowser() -> Element {
    let sources = use_context::<Sources>();
    let config = use_context::<AppConfig>();
    let list = use_list_query(
        sources.properties.clone(),
        FetchMode::InfiniteScroll,
        config.page_size,
        Vec::new(),
        None,
    );

    let properties = list.displayed();
    let pagination = list.pagination();
    let can_load_more = pagination.has_more && !list.is_loading();

    rsx! {
        QueryBar { list, placeholder: "Search title, city or address".to_string() }
        ListNotice { list }
        div {
            style: grid_style(),
            for property in properties.iter() {
                PropertyCard { key: "{property.id}", property: property.clone() }
            }
            if properties.is_empty() && !list.is_loading() {
                EmptyState { message: "No properties match your search".to_string() }
            }
            if pagination.has_more {
                Sentinel { on_visible: move |_| list.load_more() }
            }
        }
        if can_load_more {
            div {
                style: "display: flex; justify-content: center; padding: 8px;",
                button {
                    style: button_style(false),
                    onclick: move |_| list.load_more(),
                    "Load more"
                }
            }
        }
    }
}

#[component]
pub fn PropertyCard(property: Property) -> Element {
    let status = property.status_key();
    let rooms = property
        .rooms
        .map(|rooms| format!("{rooms} rooms"))
        .unwrap_or_default();

    rsx! {
        div {
            style: card_style(),
            strong { "{property.title}" }
            span { "{property.address}, {property.city}" }
            span { "€{property.price:.0} / month · {property.size:.0} m² {rooms}" }
            span { style: status_badge_style(&status), "{status}" }
        }
    }
}
