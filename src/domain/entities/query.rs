use std::collections::BTreeMap;

pub const WILDCARD_STATUS: &str = "all";

/// Categorical selector for the status/availability filter of a list screen.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selector {
    #[default]
    Any,
    Exactly(String),
}

impl Selector {
    /// Parses a select-box value, treating the wildcard and the empty string as `Any`.
    pub fn from_option(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value.eq_ignore_ascii_case(WILDCARD_STATUS) {
            Selector::Any
        } else {
            Selector::Exactly(value.to_string())
        }
    }

    pub fn as_option(&self) -> &str {
        match self {
            Selector::Any => WILDCARD_STATUS,
            Selector::Exactly(value) => value,
        }
    }

    pub fn matches(&self, status: &str) -> bool {
        match self {
            Selector::Any => true,
            Selector::Exactly(value) => value == status,
        }
    }
}

/// Search term, numeric filters and status selector driving a list screen.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct QueryState {
    pub search_term: String,
    pub filters: BTreeMap<String, f64>,
    pub status: Selector,
}

impl QueryState {
    pub fn is_unfiltered(&self) -> bool {
        self.search_term.is_empty()
            && self.filters.is_empty()
            && self.status == Selector::Any
    }

    /// Sets or clears (`None`) a named numeric filter. Non-finite values clear it.
    pub fn set_filter(&mut self, name: &str, value: Option<f64>) {
        match value.filter(|v| v.is_finite()) {
            Some(value) => {
                self.filters.insert(name.to_string(), value);
            }
            None => {
                self.filters.remove(name);
            }
        }
    }

    pub fn filter(&self, name: &str) -> Option<f64> {
        self.filters.get(name).copied()
    }

    /// Query parameters forwarded to the backend when filtering happens server-side.
    pub fn to_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        if !self.search_term.is_empty() {
            params.push(("search".to_string(), self.search_term.clone()));
        }
        for (name, value) in &self.filters {
            params.push((name.clone(), format_param_number(*value)));
        }
        if let Selector::Exactly(status) = &self.status {
            params.push(("status".to_string(), status.clone()));
        }
        params
    }
}

fn format_param_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}
