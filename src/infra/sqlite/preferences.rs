use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rusqlite::params;

use crate::infra::sqlite::schema::{init_db, open_connection};
use crate::usecase::ports::preferences::{PreferenceStore, StoreError};

pub fn load_preferences(db_path: &Path) -> Result<BTreeMap<String, String>> {
    let conn = open_connection(db_path)?;
    let mut stmt = conn
        .prepare(
            "SELECT key, value
             FROM preference
             ORDER BY key ASC",
        )
        .context("failed to prepare preference query")?;

    let rows = stmt
        .query_map([], |row| {
            let key: String = row.get(0)?;
            let value: String = row.get(1)?;
            Ok((key, value))
        })
        .context("failed to query preferences")?;

    let mut entries = BTreeMap::new();
    for row in rows {
        let (key, value) = row.context("failed to read preference row")?;
        entries.insert(key, value);
    }

    Ok(entries)
}

pub fn upsert_preferences(db_path: &Path, entries: &BTreeMap<String, String>) -> Result<()> {
    let mut conn = open_connection(db_path)?;
    let tx = conn
        .transaction()
        .context("failed to start preference transaction")?;

    let mut upsert = tx
        .prepare(
            "INSERT INTO preference(key, value)
             VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = CURRENT_TIMESTAMP",
        )
        .context("failed to prepare preference upsert")?;

    for (key, value) in entries {
        upsert
            .execute(params![key, value])
            .with_context(|| format!("failed to upsert preference {key}"))?;
    }

    drop(upsert);
    tx.commit().context("failed to commit preference updates")?;
    Ok(())
}

/// Preference store backed by a local SQLite file.
pub struct SqlitePreferenceStore {
    pub db_path: PathBuf,
}

impl SqlitePreferenceStore {
    pub fn open(db_path: PathBuf) -> Result<Self, StoreError> {
        init_db(&db_path).map_err(|err| StoreError::Message(err.to_string()))?;
        Ok(Self { db_path })
    }
}

impl PreferenceStore for SqlitePreferenceStore {
    fn load(&self) -> Result<BTreeMap<String, String>, StoreError> {
        load_preferences(&self.db_path).map_err(|err| StoreError::Message(err.to_string()))
    }

    fn save(&self, entries: &BTreeMap<String, String>) -> Result<(), StoreError> {
        upsert_preferences(&self.db_path, entries)
            .map_err(|err| StoreError::Message(err.to_string()))
    }
}
