//! Persisted app settings: dark mode, calorie goal, notifications flag.
//!
//! Settings live under their own storage key, next to the food logs, and
//! follow the same discipline: every successful update performs one
//! full-record write.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::store::{KvStorage, StorageError};

/// Storage key for the persisted settings record.
pub const SETTINGS_KEY: &str = "settings";

/// User-facing app settings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub dark_mode: bool,
    pub calorie_goal: Option<u32>,
    pub notifications: bool,
}

/// Errors that can occur during settings operations.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// Invalid field value; nothing was written.
    #[error("{0}")]
    Validation(String),
    /// The stored record exists but is not a valid settings object.
    #[error("stored settings are corrupt: {0}")]
    Parse(#[from] serde_json::Error),
    /// The storage backend failed to read the record.
    #[error("failed to read settings: {0}")]
    StorageRead(#[source] StorageError),
    /// The storage backend failed to persist the record.
    #[error("failed to write settings: {0}")]
    StorageWrite(#[source] StorageError),
}

/// Owns the persisted settings record.
pub struct SettingsStore {
    storage: Box<dyn KvStorage>,
    settings: Settings,
}

impl SettingsStore {
    pub fn new(storage: Box<dyn KvStorage>) -> Self {
        Self {
            storage,
            settings: Settings::default(),
        }
    }

    /// Reads the persisted settings. An absent record loads as defaults
    /// and writes nothing; a corrupt record is surfaced, not defaulted.
    pub async fn load(&mut self) -> Result<&Settings, SettingsError> {
        let raw = self
            .storage
            .read(SETTINGS_KEY)
            .await
            .map_err(SettingsError::StorageRead)?;

        self.settings = match raw {
            Some(text) => serde_json::from_str(&text)?,
            None => Settings::default(),
        };

        Ok(&self.settings)
    }

    /// Current in-memory settings. No I/O.
    pub fn current(&self) -> &Settings {
        &self.settings
    }

    pub async fn set_dark_mode(&mut self, on: bool) -> Result<(), SettingsError> {
        let mut updated = self.settings.clone();
        updated.dark_mode = on;
        self.apply(updated).await
    }

    pub async fn set_notifications(&mut self, on: bool) -> Result<(), SettingsError> {
        let mut updated = self.settings.clone();
        updated.notifications = on;
        self.apply(updated).await
    }

    /// Sets the daily calorie goal from raw user text. An empty string
    /// clears the goal; anything else must parse as a non-negative
    /// integer or the update is rejected with no state change.
    pub async fn set_calorie_goal(&mut self, raw: &str) -> Result<(), SettingsError> {
        let text = raw.trim();
        let goal = if text.is_empty() {
            None
        } else {
            Some(text.parse::<u32>().map_err(|_| {
                SettingsError::Validation(format!(
                    "calorie goal must be a non-negative whole number, got '{}'",
                    raw
                ))
            })?)
        };

        let mut updated = self.settings.clone();
        updated.calorie_goal = goal;
        self.apply(updated).await
    }

    async fn apply(&mut self, updated: Settings) -> Result<(), SettingsError> {
        let text = serde_json::to_string(&updated)?;
        self.storage
            .write(SETTINGS_KEY, &text)
            .await
            .map_err(SettingsError::StorageWrite)?;

        debug!(?updated, "persisted settings");
        self.settings = updated;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStorage;

    fn memory_store() -> (SettingsStore, MemoryStorage) {
        let storage = MemoryStorage::new();
        let store = SettingsStore::new(Box::new(storage.clone()));
        (store, storage)
    }

    #[tokio::test]
    async fn test_load_absent_record_uses_defaults_and_writes_nothing() {
        let (mut store, storage) = memory_store();

        let settings = store.load().await.unwrap();
        assert_eq!(settings, &Settings::default());
        assert!(!settings.dark_mode);
        assert!(settings.calorie_goal.is_none());
        assert!(!settings.notifications);

        assert!(storage.read(SETTINGS_KEY).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_updates_persist_and_reload() {
        let (mut store, storage) = memory_store();
        store.load().await.unwrap();

        store.set_dark_mode(true).await.unwrap();
        store.set_calorie_goal("2000").await.unwrap();
        store.set_notifications(true).await.unwrap();

        let mut reloaded = SettingsStore::new(Box::new(storage));
        let settings = reloaded.load().await.unwrap();
        assert!(settings.dark_mode);
        assert_eq!(settings.calorie_goal, Some(2000));
        assert!(settings.notifications);
    }

    #[tokio::test]
    async fn test_calorie_goal_rejects_non_numeric_text() {
        let (mut store, storage) = memory_store();
        store.load().await.unwrap();

        let result = store.set_calorie_goal("lots").await;
        assert!(matches!(result, Err(SettingsError::Validation(_))));
        assert!(store.current().calorie_goal.is_none());
        assert!(storage.read(SETTINGS_KEY).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_calorie_goal_empty_text_clears_goal() {
        let (mut store, _storage) = memory_store();
        store.load().await.unwrap();

        store.set_calorie_goal("1800").await.unwrap();
        assert_eq!(store.current().calorie_goal, Some(1800));

        store.set_calorie_goal("").await.unwrap();
        assert!(store.current().calorie_goal.is_none());
    }

    #[tokio::test]
    async fn test_record_uses_camel_case_keys() {
        let (mut store, storage) = memory_store();
        store.load().await.unwrap();
        store.set_dark_mode(true).await.unwrap();

        let text = storage.read(SETTINGS_KEY).await.unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["darkMode"], true);
        assert!(value.as_object().unwrap().contains_key("calorieGoal"));
    }

    #[tokio::test]
    async fn test_load_corrupt_record_is_an_error() {
        let (mut store, storage) = memory_store();
        storage.write(SETTINGS_KEY, "not json").await.unwrap();

        assert!(matches!(store.load().await, Err(SettingsError::Parse(_))));
    }
}
