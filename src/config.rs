use std::str::FromStr;

use tracing::warn;

use crate::domain::entities::page::{DEFAULT_BULK_SIZE, DEFAULT_PAGE_SIZE};
use crate::domain::entities::session::{Role, Session};

pub const ENV_API_URL: &str = "RENTDESK_API_URL";
pub const ENV_TOKEN: &str = "RENTDESK_TOKEN";
pub const ENV_ROLE: &str = "RENTDESK_ROLE";
pub const ENV_USER_ID: &str = "RENTDESK_USER_ID";
pub const ENV_USER_NAME: &str = "RENTDESK_USER_NAME";
pub const ENV_PAGE_SIZE: &str = "RENTDESK_PAGE_SIZE";
pub const ENV_BULK_SIZE: &str = "RENTDESK_BULK_SIZE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Backend base url. Without one the app runs on built-in sample data.
    pub api_base_url: Option<String>,
    pub token: Option<String>,
    pub role: Role,
    pub user_id: i64,
    pub user_name: String,
    pub page_size: usize,
    pub bulk_size: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: None,
            token: None,
            role: Role::Seeker,
            user_id: 1,
            user_name: "Guest".to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            bulk_size: DEFAULT_BULK_SIZE,
        }
    }
}

fn parse_or_default<T: FromStr>(key: &str, raw: Option<String>, fallback: T) -> T {
    match raw {
        Some(value) => value.trim().parse::<T>().unwrap_or_else(|_| {
            warn!(key, value = %value, "invalid configuration value, using default");
            fallback
        }),
        None => fallback,
    }
}

fn non_empty(raw: Option<String>) -> Option<String> {
    raw.map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = AppConfig::default();
        Self {
            api_base_url: non_empty(lookup(ENV_API_URL)),
            token: non_empty(lookup(ENV_TOKEN)),
            role: parse_or_default(ENV_ROLE, lookup(ENV_ROLE), defaults.role),
            user_id: parse_or_default(ENV_USER_ID, lookup(ENV_USER_ID), defaults.user_id),
            user_name: non_empty(lookup(ENV_USER_NAME)).unwrap_or(defaults.user_name),
            page_size: parse_or_default(ENV_PAGE_SIZE, lookup(ENV_PAGE_SIZE), defaults.page_size)
                .max(1),
            bulk_size: parse_or_default(ENV_BULK_SIZE, lookup(ENV_BULK_SIZE), defaults.bulk_size)
                .max(1),
        }
    }

    pub fn session(&self) -> Session {
        Session {
            user_id: self.user_id,
            display_name: self.user_name.clone(),
            role: self.role,
            token: self.token.clone(),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn default_db_path() -> anyhow::Result<std::path::PathBuf> {
    let project_dirs = directories::ProjectDirs::from("com", "rentdesk", "rentdesk")
        .ok_or_else(|| anyhow::anyhow!("unable to resolve data directory"))?;
    Ok(project_dirs.data_local_dir().join("preferences.sqlite"))
}
