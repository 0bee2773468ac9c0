pub mod components;
pub mod routes;
pub mod screens;
pub mod state;
pub mod style;
