use serde::{Deserialize, Serialize};

use crate::domain::entities::record::{RangeFilter, Record};

pub const STATUS_AVAILABLE: &str = "available";
pub const STATUS_UNAVAILABLE: &str = "unavailable";

const PROPERTY_FILTERS: &[RangeFilter] = &[
    RangeFilter::at_most("maxPrice", "price"),
    RangeFilter::at_least("minSize", "size"),
    RangeFilter::at_least("minRooms", "rooms"),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: i64,
    pub title: String,
    pub city: String,
    pub address: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    pub size: f64,
    #[serde(default)]
    pub rooms: Option<u32>,
    pub available: bool,
    #[serde(default)]
    pub landlord_id: Option<i64>,
}

impl Record for Property {
    const COLLECTION: &'static str = "properties";

    fn id(&self) -> i64 {
        self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.city.as_str(), self.address.as_str()]
    }

    fn range_filters() -> &'static [RangeFilter] {
        PROPERTY_FILTERS
    }

    fn numeric_field(&self, field: &str) -> Option<f64> {
        match field {
            "price" => Some(self.price),
            "size" => Some(self.size),
            "rooms" => self.rooms.map(f64::from),
            _ => None,
        }
    }

    fn status_key(&self) -> String {
        if self.available {
            STATUS_AVAILABLE.to_string()
        } else {
            STATUS_UNAVAILABLE.to_string()
        }
    }

    fn status_options() -> &'static [&'static str] {
        &[STATUS_AVAILABLE, STATUS_UNAVAILABLE]
    }
}
