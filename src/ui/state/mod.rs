pub mod app_state;
pub mod list_state;
pub mod sources;
