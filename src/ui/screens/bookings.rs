use dioxus::prelude::*;

use crate::config::AppConfig;
use crate::domain::entities::page::FetchMode;
use crate::domain::entities::record::Record;
use crate::ui::components::notice::{EmptyState, ListNotice};
use crate::ui::components::pager::Pager;
use crate::ui::components::query_bar::QueryBar;
use crate::ui::state::list_state::use_list_query;
use crate::ui::state::sources::Sources;
use crate::ui::style::{status_badge_style, table_container_style, table_header_cell_style};

/// Whose bookings a booking list shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingScope {
    Seeker(i64),
    Landlord(i64),
    All,
}

impl BookingScope {
    pub fn params(&self) -> Vec<(String, String)> {
        match self {
            BookingScope::Seeker(id) => vec![("seekerId".to_string(), id.to_string())],
            BookingScope::Landlord(id) => vec![("landlordId".to_string(), id.to_string())],
            BookingScope::All => Vec::new(),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            BookingScope::Seeker(_) => "My bookings",
            BookingScope::Landlord(_) => "Booking requests",
            BookingScope::All => "All bookings",
        }
    }
}

#[component]
pub fn BookingList(scope: BookingScope, page: Option<usize>) -> Element {
    let sources = use_context::<Sources>();
    let config = use_context::<AppConfig>();
    let list = use_list_query(
        sources.bookings.clone(),
        FetchMode::ServerPaged,
        config.page_size,
        scope.params(),
        page,
    );

    let bookings = list.displayed();
    let shown = bookings.len();

    rsx! {
        h3 { style: "margin: 8px 12px 0;", "{scope.title()}" }
        QueryBar { list, placeholder: "Search property or guest".to_string() }
        ListNotice { list }
        div {
            style: table_container_style(),
            table {
                style: "width: 100%; border-collapse: collapse;",
                thead {
                    tr {
                        th { style: table_header_cell_style(), "Property" }
                        th { style: table_header_cell_style(), "Guest" }
                        th { style: table_header_cell_style(), "From" }
                        th { style: table_header_cell_style(), "To" }
                        th { style: table_header_cell_style(), "Nights" }
                        th { style: table_header_cell_style(), "Total" }
                        th { style: table_header_cell_style(), "Status" }
                    }
                }
                tbody {
                    for booking in bookings.iter() {
                        tr {
                            key: "{booking.id}",
                            td { "{booking.property_title}" }
                            td { "{booking.seeker_name}" }
                            td { "{booking.start_date}" }
                            td { "{booking.end_date}" }
                            td { "{booking.nights()}" }
                            td { "€{booking.total_price:.0}" }
                            td {
                                span {
                                    style: status_badge_style(&booking.status_key()),
                                    "{booking.status_key()}"
                                }
                            }
                        }
                    }
                }
            }
            if bookings.is_empty() && !list.is_loading() {
                EmptyState { message: "No bookings yet".to_string() }
            }
        }
        Pager { list, shown }
    }
}
