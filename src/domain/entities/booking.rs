use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::entities::record::{RangeFilter, Record};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BookingStatus {
    Pending,
    Approved,
    Rejected,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "PENDING",
            BookingStatus::Approved => "APPROVED",
            BookingStatus::Rejected => "REJECTED",
            BookingStatus::Cancelled => "CANCELLED",
        }
    }
}

const BOOKING_FILTERS: &[RangeFilter] = &[RangeFilter::at_most("maxTotal", "totalPrice")];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: i64,
    pub property_id: i64,
    #[serde(default)]
    pub property_title: String,
    pub seeker_id: i64,
    #[serde(default)]
    pub seeker_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_price: f64,
    pub status: BookingStatus,
}

impl Booking {
    pub fn nights(&self) -> i64 {
        (self.end_date - self.start_date).num_days().max(0)
    }
}

impl Record for Booking {
    const COLLECTION: &'static str = "bookings";

    fn id(&self) -> i64 {
        self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.property_title.as_str(), self.seeker_name.as_str()]
    }

    fn range_filters() -> &'static [RangeFilter] {
        BOOKING_FILTERS
    }

    fn numeric_field(&self, field: &str) -> Option<f64> {
        match field {
            "totalPrice" => Some(self.total_price),
            _ => None,
        }
    }

    fn status_key(&self) -> String {
        self.status.as_str().to_string()
    }

    fn status_options() -> &'static [&'static str] {
        &["PENDING", "APPROVED", "REJECTED", "CANCELLED"]
    }
}
