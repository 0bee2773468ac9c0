use dioxus::prelude::*;

use crate::config::AppConfig;
use crate::domain::entities::page::FetchMode;
use crate::ui::components::notice::{EmptyState, ListNotice};
use crate::ui::components::pager::Pager;
use crate::ui::components::query_bar::QueryBar;
use crate::ui::state::list_state::use_list_query;
use crate::ui::state::sources::Sources;
use crate::ui::style::{table_container_style, table_header_cell_style};

/// User administration; the backend pages and filters the user list.
#[component]
pub fn UserManager(page: Option<usize>) -> Element {
    let sources = use_context::<Sources>();
    let config = use_context::<AppConfig>();
    let list = use_list_query(
        sources.users.clone(),
        FetchMode::ServerPaged,
        config.page_size,
        Vec::new(),
        page,
    );

    let users = list.displayed();
    let shown = users.len();

    rsx! {
        QueryBar { list, placeholder: "Search name or email".to_string() }
        ListNotice { list }
        div {
            style: table_container_style(),
            table {
                style: "width: 100%; border-collapse: collapse;",
                thead {
                    tr {
                        th { style: table_header_cell_style(), "Name" }
                        th { style: table_header_cell_style(), "Email" }
                        th { style: table_header_cell_style(), "Role" }
                        th { style: table_header_cell_style(), "Enabled" }
                    }
                }
                tbody {
                    for user in users.iter() {
                        tr {
                            key: "{user.id}",
                            td { "{user.full_name()}" }
                            td { "{user.email}" }
                            td { "{user.role}" }
                            td { if user.enabled { "yes" } else { "no" } }
                        }
                    }
                }
            }
            if users.is_empty() && !list.is_loading() {
                EmptyState { message: "No users found".to_string() }
            }
        }
        Pager { list, shown }
    }
}
