use std::collections::BTreeMap;
use std::sync::Mutex;

use crate::usecase::ports::preferences::{PreferenceStore, StoreError};

/// Keeps preferences for the lifetime of the process.
#[derive(Default)]
pub struct MemoryPreferenceStore {
    entries: Mutex<BTreeMap<String, String>>,
}

impl MemoryPreferenceStore {
    pub fn with_entries(entries: BTreeMap<String, String>) -> Self {
        Self {
            entries: Mutex::new(entries),
        }
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn load(&self) -> Result<BTreeMap<String, String>, StoreError> {
        self.entries
            .lock()
            .map(|entries| entries.clone())
            .map_err(|err| StoreError::Message(err.to_string()))
    }

    fn save(&self, entries: &BTreeMap<String, String>) -> Result<(), StoreError> {
        let mut stored = self
            .entries
            .lock()
            .map_err(|err| StoreError::Message(err.to_string()))?;
        stored.extend(entries.iter().map(|(k, v)| (k.clone(), v.clone())));
        Ok(())
    }
}
