use std::rc::Rc;

use crate::config::AppConfig;
use crate::domain::entities::booking::Booking;
use crate::domain::entities::property::Property;
use crate::domain::entities::user::User;
use crate::infra::http::rest_source::RestSource;
use crate::infra::memory::seed::{sample_bookings, sample_properties, sample_users};
use crate::infra::memory::source::MemorySource;
use crate::usecase::ports::source::RecordSource;

/// Record sources used by the list screens.
#[derive(Clone)]
pub struct Sources {
    pub properties: Rc<dyn RecordSource<Property>>,
    pub users: Rc<dyn RecordSource<User>>,
    pub bookings: Rc<dyn RecordSource<Booking>>,
}

impl Sources {
    pub fn from_config(config: &AppConfig) -> Self {
        match &config.api_base_url {
            Some(base_url) => {
                let client = reqwest::Client::new();
                Self {
                    properties: Rc::new(
                        RestSource::new(client.clone(), base_url.clone())
                            .with_token(config.token.clone()),
                    ),
                    users: Rc::new(
                        RestSource::new(client.clone(), base_url.clone())
                            .with_token(config.token.clone()),
                    ),
                    bookings: Rc::new(
                        RestSource::new(client, base_url.clone()).with_token(config.token.clone()),
                    ),
                }
            }
            None => Self::sample(),
        }
    }

    pub fn sample() -> Self {
        Self {
            properties: Rc::new(MemorySource::new(sample_properties())),
            users: Rc::new(MemorySource::new(sample_users())),
            bookings: Rc::new(MemorySource::new(sample_bookings())),
        }
    }
}
