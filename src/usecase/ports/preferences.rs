use std::collections::BTreeMap;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("{0}")]
    Message(String),
}

/// Durable key/value storage for user preferences.
pub trait PreferenceStore: Send + Sync {
    fn load(&self) -> Result<BTreeMap<String, String>, StoreError>;
    fn save(&self, entries: &BTreeMap<String, String>) -> Result<(), StoreError>;
}
