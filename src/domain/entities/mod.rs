pub mod booking;
pub mod page;
pub mod preferences;
pub mod property;
pub mod query;
pub mod record;
pub mod session;
pub mod user;
