use dioxus::prelude::*;

/// Placed after the last rendered item; fires `on_visible` whenever it scrolls into view.
#[component]
pub fn Sentinel(on_visible: EventHandler<()>) -> Element {
    rsx! {
        div {
            style: "height: 1px; width: 100%; grid-column: 1 / -1;",
            onvisible: move |evt| {
                if evt.data().is_intersecting().unwrap_or(false) {
                    on_visible.call(());
                }
            },
        }
    }
}
