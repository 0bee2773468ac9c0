pub mod preferences;
pub mod schema;
