use dioxus::prelude::*;
use tracing::error;

use crate::domain::entities::preferences::{ColorScheme, Preferences, MAX_BORDER_RADIUS};
use crate::ui::state::app_state::AppState;
use crate::ui::style::button_style;
use crate::usecase::services::preference_service::PreferenceService;

fn persist(mut state: AppState, service: &PreferenceService, next: Preferences) {
    if *state.preferences.peek() == next {
        return;
    }
    match service.save(&next) {
        Ok(()) => {
            state.preferences.set(next);
            state.status.set("Preferences saved".to_string());
        }
        Err(err) => {
            error!(error = %err, "failed to save preferences");
            state
                .status
                .set(format!("Could not save preferences: {err}"));
        }
    }
}

#[component]
pub fn SettingsPanel() -> Element {
    let state = use_context::<AppState>();
    let service = use_context::<PreferenceService>();
    let prefs = *state.preferences.read();
    let status = state.status.read().clone();

    let theme_service = service.clone();
    let scheme_service = service.clone();
    let radius_service = service;

    rsx! {
        div {
            style: "padding: 16px 12px; display: flex; flex-direction: column; gap: 16px; max-width: 420px;",
            h3 { style: "margin: 0;", "Appearance" }
            label {
                style: "display: flex; justify-content: space-between; align-items: center;",
                span { "Theme" }
                button {
                    style: button_style(false),
                    onclick: move |_| {
                        let next = Preferences {
                            theme: prefs.theme.toggled(),
                            ..prefs
                        };
                        persist(state, &theme_service, next);
                    },
                    "{prefs.theme.as_str()}"
                }
            }
            label {
                style: "display: flex; justify-content: space-between; align-items: center;",
                span { "Color scheme" }
                select {
                    value: "{prefs.color_scheme.as_str()}",
                    onchange: move |evt| {
                        if let Some(color_scheme) = ColorScheme::parse(&evt.value()) {
                            let next = Preferences { color_scheme, ..prefs };
                            persist(state, &scheme_service, next);
                        }
                    },
                    for scheme in ColorScheme::ALL {
                        option { key: "{scheme.as_str()}", value: "{scheme.as_str()}", "{scheme.as_str()}" }
                    }
                }
            }
            label {
                style: "display: flex; justify-content: space-between; align-items: center; gap: 12px;",
                span { "Corner radius: {prefs.border_radius}px" }
                input {
                    r#type: "range",
                    min: "0",
                    max: "{MAX_BORDER_RADIUS}",
                    value: "{prefs.border_radius}",
                    oninput: move |evt| {
                        if let Ok(radius) = evt.value().parse::<u8>() {
                            persist(state, &radius_service, prefs.with_border_radius(radius));
                        }
                    },
                }
            }
            if !status.is_empty() {
                span { style: "opacity: 0.7;", "{status}" }
            }
        }
    }
}
