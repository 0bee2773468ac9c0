use dioxus::prelude::*;

use crate::domain::entities::session::Viewer;
use crate::ui::screens::bookings::{BookingList, BookingScope};
use crate::ui::screens::dashboard::Dashboard;
use crate::ui::screens::deep_link_page;
use crate::ui::screens::property_browse::PropertyBrowser;
use crate::ui::screens::property_manage::PropertyManager;
use crate::ui::screens::settings::SettingsPanel;
use crate::ui::screens::user_manage::UserManager;
use crate::ui::state::app_state::AppState;
use crate::ui::style::root_style;

#[derive(Routable, Clone, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},
        #[route("/browse")]
        Browse {},
        #[route("/properties?:page")]
        Properties { page: usize },
        #[route("/users?:page")]
        Users { page: usize },
        #[route("/bookings?:page")]
        Bookings { page: usize },
        #[route("/settings")]
        Settings {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

/// Navigation entries for a viewer, dashboard first.
pub fn nav_items(viewer: Viewer) -> Vec<(&'static str, Route)> {
    let mut items = vec![("Dashboard", Route::Home {})];
    match viewer {
        Viewer::Seeker { .. } => {
            items.push(("Browse", Route::Browse {}));
            items.push(("My bookings", Route::Bookings { page: 0 }));
        }
        Viewer::Landlord { .. } => {
            items.push(("My properties", Route::Properties { page: 0 }));
            items.push(("Booking requests", Route::Bookings { page: 0 }));
        }
        Viewer::Admin => {
            items.push(("Users", Route::Users { page: 0 }));
            items.push(("Properties", Route::Properties { page: 0 }));
            items.push(("Bookings", Route::Bookings { page: 0 }));
        }
    }
    items.push(("Settings", Route::Settings {}));
    items
}

pub fn booking_scope(viewer: Viewer) -> BookingScope {
    match viewer {
        Viewer::Seeker { user_id } => BookingScope::Seeker(user_id),
        Viewer::Landlord { landlord_id } => BookingScope::Landlord(landlord_id),
        Viewer::Admin => BookingScope::All,
    }
}

fn use_viewer() -> Viewer {
    let state = use_context::<AppState>();
    let viewer = state.session.read().viewer();
    viewer
}

#[component]
fn Shell() -> Element {
    let state = use_context::<AppState>();
    let prefs = *state.preferences.read();
    let session = state.session.read().clone();
    let viewer = session.viewer();

    rsx! {
        div {
            style: root_style(&prefs),
            nav {
                style: "display: flex; gap: 8px; align-items: center; padding: 8px 12px; border-bottom: 1px solid var(--border);",
                strong { style: "margin-right: 12px; color: var(--accent);", "rentdesk" }
                for (label, route) in nav_items(viewer) {
                    Link { key: "{label}", to: route,
                        span { style: "color: inherit;", "{label}" }
                    }
                }
                span { style: "margin-left: auto; opacity: 0.7;", "{session.display_name} · {session.role}" }
            }
            div {
                style: "display: flex; flex-direction: column; flex: 1 1 auto; min-height: 0;",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Home() -> Element {
    let viewer = use_viewer();
    rsx! { Dashboard { viewer } }
}

#[component]
fn Browse() -> Element {
    match use_viewer() {
        Viewer::Seeker { .. } | Viewer::Admin => rsx! { PropertyBrowser {} },
        Viewer::Landlord { .. } => rsx! { Forbidden {} },
    }
}

#[component]
fn Properties(page: usize) -> Element {
    let page = deep_link_page(page);
    match use_viewer() {
        Viewer::Landlord { landlord_id } => rsx! {
            PropertyManager { landlord_id: Some(landlord_id), page }
        },
        Viewer::Admin => rsx! { PropertyManager { landlord_id: None, page } },
        Viewer::Seeker { .. } => rsx! { Forbidden {} },
    }
}

#[component]
fn Users(page: usize) -> Element {
    match use_viewer() {
        Viewer::Admin => rsx! { UserManager { page: deep_link_page(page) } },
        Viewer::Seeker { .. } | Viewer::Landlord { .. } => rsx! { Forbidden {} },
    }
}

#[component]
fn Bookings(page: usize) -> Element {
    let scope = booking_scope(use_viewer());
    rsx! { BookingList { scope, page: deep_link_page(page) } }
}

#[component]
fn Settings() -> Element {
    rsx! { SettingsPanel {} }
}

#[component]
fn Forbidden() -> Element {
    rsx! {
        div { style: "padding: 24px;", "This section is not available for your account." }
    }
}

#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        div {
            style: "padding: 24px;",
            p { "Nothing here: /{path}" }
            Link { to: Route::Home {}, "Back to dashboard" }
        }
    }
}
