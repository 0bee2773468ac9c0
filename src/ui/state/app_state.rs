use dioxus::prelude::{use_signal, Signal};

use crate::domain::entities::preferences::Preferences;
use crate::domain::entities::session::Session;

/// Application-wide signals shared through context.
#[derive(Clone, Copy, PartialEq)]
pub struct AppState {
    pub session: Signal<Session>,
    pub preferences: Signal<Preferences>,
    pub status: Signal<String>,
}

impl AppState {
    pub fn new(session: Session, preferences: Preferences) -> Self {
        Self {
            session: use_signal(|| session),
            preferences: use_signal(|| preferences),
            status: use_signal(String::new),
        }
    }
}
