use serde::{Deserialize, Serialize};

use crate::domain::entities::record::{RangeFilter, Record};
use crate::domain::entities::session::Role;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: Role,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

impl Record for User {
    const COLLECTION: &'static str = "users";

    fn id(&self) -> i64 {
        self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.first_name.as_str(),
            self.last_name.as_str(),
            self.email.as_str(),
        ]
    }

    fn range_filters() -> &'static [RangeFilter] {
        &[]
    }

    fn numeric_field(&self, _field: &str) -> Option<f64> {
        None
    }

    fn status_key(&self) -> String {
        self.role.as_str().to_string()
    }

    fn status_options() -> &'static [&'static str] {
        &["SEEKER", "LANDLORD", "ADMIN"]
    }
}
