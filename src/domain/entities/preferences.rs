use std::collections::BTreeMap;

use tracing::warn;

pub const KEY_THEME: &str = "theme";
pub const KEY_COLOR_SCHEME: &str = "color_scheme";
pub const KEY_BORDER_RADIUS: &str = "border_radius";

pub const MAX_BORDER_RADIUS: u8 = 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorScheme {
    #[default]
    Blue,
    Green,
    Purple,
    Orange,
}

impl ColorScheme {
    pub const ALL: [ColorScheme; 4] = [
        ColorScheme::Blue,
        ColorScheme::Green,
        ColorScheme::Purple,
        ColorScheme::Orange,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ColorScheme::Blue => "blue",
            ColorScheme::Green => "green",
            ColorScheme::Purple => "purple",
            ColorScheme::Orange => "orange",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|scheme| scheme.as_str() == value)
    }

    pub fn accent(&self) -> &'static str {
        match self {
            ColorScheme::Blue => "#1677ff",
            ColorScheme::Green => "#2e9d5b",
            ColorScheme::Purple => "#7a4fd6",
            ColorScheme::Orange => "#e8772e",
        }
    }
}

/// Visual preferences of the dashboard, persisted through a `PreferenceStore`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preferences {
    pub theme: ThemeMode,
    pub color_scheme: ColorScheme,
    pub border_radius: u8,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            theme: ThemeMode::Light,
            color_scheme: ColorScheme::Blue,
            border_radius: 8,
        }
    }
}

impl Preferences {
    /// Builds preferences from stored key/value pairs. Unknown or invalid entries
    /// keep their default.
    pub fn from_entries(entries: &BTreeMap<String, String>) -> Self {
        let mut prefs = Preferences::default();

        if let Some(value) = entries.get(KEY_THEME) {
            match ThemeMode::parse(value) {
                Some(theme) => prefs.theme = theme,
                None => warn!(value = %value, "ignoring stored theme"),
            }
        }
        if let Some(value) = entries.get(KEY_COLOR_SCHEME) {
            match ColorScheme::parse(value) {
                Some(scheme) => prefs.color_scheme = scheme,
                None => warn!(value = %value, "ignoring stored color scheme"),
            }
        }
        if let Some(value) = entries.get(KEY_BORDER_RADIUS) {
            match value.parse::<u8>() {
                Ok(radius) => prefs.border_radius = radius.min(MAX_BORDER_RADIUS),
                Err(_) => warn!(value = %value, "ignoring stored border radius"),
            }
        }

        prefs
    }

    pub fn to_entries(&self) -> BTreeMap<String, String> {
        BTreeMap::from([
            (KEY_THEME.to_string(), self.theme.as_str().to_string()),
            (
                KEY_COLOR_SCHEME.to_string(),
                self.color_scheme.as_str().to_string(),
            ),
            (
                KEY_BORDER_RADIUS.to_string(),
                self.border_radius.to_string(),
            ),
        ])
    }

    pub fn with_border_radius(mut self, radius: u8) -> Self {
        self.border_radius = radius.min(MAX_BORDER_RADIUS);
        self
    }
}
