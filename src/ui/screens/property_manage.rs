use dioxus::prelude::*;

use crate::config::AppConfig;
use crate::domain::entities::page::FetchMode;
use crate::domain::entities::record::Record;
use crate::ui::components::notice::{EmptyState, ListNotice};
use crate::ui::components::pager::Pager;
use crate::ui::components::query_bar::QueryBar;
use crate::ui::state::list_state::use_list_query;
use crate::ui::state::sources::Sources;
use crate::ui::style::{
    button_style, status_badge_style, table_container_style, table_header_cell_style,
};

pub fn landlord_scope(landlord_id: Option<i64>) -> Vec<(String, String)> {
    landlord_id
        .map(|id| vec![("landlordId".to_string(), id.to_string())])
        .unwrap_or_default()
}

/// Property table for landlords (own listings) and admins (all listings).
/// Everything is fetched once and searched, filtered and paged locally.
#[component]
pub fn PropertyManager(landlord_id: Option<i64>, page: Option<usize>) -> Element {
    let sources = use_context::<Sources>();
    let config = use_context::<AppConfig>();
    let list = use_list_query(
        sources.properties.clone(),
        FetchMode::Bulk {
            size: config.bulk_size,
        },
        config.page_size,
        landlord_scope(landlord_id),
        page,
    );

    let rows = list.displayed();
    let shown = rows.len();

    rsx! {
        div {
            style: "display: flex; align-items: center; padding: 8px 12px 0;",
            h3 { style: "margin: 0; flex: 1;", "Properties" }
            button { style: button_style(false), onclick: move |_| list.refresh(), "Reload" }
        }
        QueryBar { list, placeholder: "Search title, city or address".to_string() }
        ListNotice { list }
        div {
            style: table_container_style(),
            table {
                style: "width: 100%; border-collapse: collapse;",
                thead {
                    tr {
                        th { style: table_header_cell_style(), "Title" }
                        th { style: table_header_cell_style(), "City" }
                        th { style: table_header_cell_style(), "Address" }
                        th { style: table_header_cell_style(), "Price" }
                        th { style: table_header_cell_style(), "Size" }
                        th { style: table_header_cell_style(), "Status" }
                    }
                }
                tbody {
                    for property in rows.iter() {
                        tr {
                            key: "{property.id}",
                            td { "{property.title}" }
                            td { "{property.city}" }
                            td { "{property.address}" }
                            td { "€{property.price:.0}" }
                            td { "{property.size:.0} m²" }
                            td {
                                span {
                                    style: status_badge_style(&property.status_key()),
                                    "{property.status_key()}"
                                }
                            }
                        }
                    }
                }
            }
            if rows.is_empty() && !list.is_loading() {
                EmptyState { message: "No properties found".to_string() }
            }
        }
        Pager { list, shown }
    }
}
