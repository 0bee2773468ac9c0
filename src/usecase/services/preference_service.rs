use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::entities::preferences::Preferences;
use crate::usecase::ports::preferences::{PreferenceStore, StoreError};

#[derive(Clone)]
pub struct PreferenceService {
    store: Arc<dyn PreferenceStore>,
}

impl PreferenceService {
    pub fn new(store: Arc<dyn PreferenceStore>) -> Self {
        Self { store }
    }

    /// Loads stored preferences, falling back to defaults when the store fails.
    pub fn load(&self) -> Preferences {
        match self.store.load() {
            Ok(entries) => Preferences::from_entries(&entries),
            Err(err) => {
                warn!(error = %err, "failed to load preferences, using defaults");
                Preferences::default()
            }
        }
    }

    pub fn save(&self, prefs: &Preferences) -> Result<(), StoreError> {
        self.store.save(&prefs.to_entries())?;
        info!(
            theme = prefs.theme.as_str(),
            color_scheme = prefs.color_scheme.as_str(),
            border_radius = prefs.border_radius,
            "preferences saved"
        );
        Ok(())
    }
}
