use dioxus::prelude::*;

use crate::domain::entities::session::Viewer;
use crate::ui::routes::{nav_items, Route};
use crate::ui::state::app_state::AppState;
use crate::ui::style::card_style;

/// Landing page: one card per section available to the viewer.
#[component]
pub fn Dashboard(viewer: Viewer) -> Element {
    let state = use_context::<AppState>();
    let name = state.session.read().display_name.clone();
    let heading = match viewer {
        Viewer::Seeker { .. } => "Find your next room",
        Viewer::Landlord { .. } => "Manage your listings",
        Viewer::Admin => "Marketplace administration",
    };

    rsx! {
        div {
            style: "padding: 16px 12px; display: flex; flex-direction: column; gap: 12px;",
            h2 { style: "margin: 0;", "{heading}" }
            span { style: "opacity: 0.7;", "Signed in as {name}" }
            div {
                style: "display: grid; grid-template-columns: repeat(auto-fill, minmax(200px, 1fr)); gap: 12px;",
                for (label, route) in nav_items(viewer).into_iter().skip(1) {
                    Link { key: "{label}", to: route,
                        div { style: card_style(), strong { "{label}" } }
                    }
                }
            }
        }
    }
}
