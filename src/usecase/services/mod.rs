pub mod fetcher;
pub mod list_query;
pub mod preference_service;
pub mod projector;
pub mod reducer;
