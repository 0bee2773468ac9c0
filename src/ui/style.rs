use crate::domain::entities::preferences::{Preferences, ThemeMode};

pub fn palette(theme: ThemeMode) -> (&'static str, &'static str, &'static str) {
    match theme {
        ThemeMode::Light => ("#ffffff", "#1f1f1f", "#e2e2e2"),
        ThemeMode::Dark => ("#17191c", "#e8e8e8", "#33363b"),
    }
}

pub fn root_style(prefs: &Preferences) -> String {
    let (background, foreground, border) = palette(prefs.theme);
    format!(
        "--accent: {}; --radius: {}px; --border: {border}; \
         height: 100vh; display: flex; flex-direction: column; \
         background: {background}; color: {foreground}; font-family: system-ui, sans-serif;",
        prefs.color_scheme.accent(),
        prefs.border_radius,
    )
}

pub fn card_style() -> &'static str {
    "border: 1px solid var(--border); border-radius: var(--radius); padding: 12px; \
     display: flex; flex-direction: column; gap: 4px;"
}

pub fn grid_style() -> &'static str {
    "display: grid; grid-template-columns: repeat(auto-fill, minmax(220px, 1fr)); gap: 12px; \
     padding: 12px; overflow-y: auto; flex: 1 1 auto;"
}

pub fn table_container_style() -> &'static str {
    "flex: 1 1 auto; min-height: 0; overflow: auto; padding: 0 12px;"
}

pub fn table_header_cell_style() -> &'static str {
    "position: sticky; top: 0; z-index: 1; text-align: left; padding: 6px 8px; \
     background: var(--accent); color: #fff;"
}

pub fn button_style(active: bool) -> String {
    let (background, color) = if active {
        ("var(--accent)", "#fff")
    } else {
        ("transparent", "inherit")
    };
    format!(
        "border: 1px solid var(--border); border-radius: var(--radius); padding: 4px 10px; \
         cursor: pointer; background: {background}; color: {color};"
    )
}

pub fn status_badge_style(status: &str) -> String {
    let color = match status {
        "available" | "APPROVED" => "#2e9d5b",
        "unavailable" | "REJECTED" | "CANCELLED" => "#c0392b",
        _ => "#8a8a8a",
    };
    format!("color: {color}; font-weight: 600; font-size: 12px;")
}
