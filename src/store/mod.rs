//! The food log store: sole owner of the persisted meal log.
//!
//! All mutation passes through [`LogStore`]. Every successful append or
//! delete performs exactly one full-collection write to the backend; there
//! is no batching and no debounce. The store expects to be driven
//! sequentially by a single caller (the `&mut self` receivers make
//! concurrent mutation through one store value unrepresentable); callers
//! must await one mutation before issuing the next.

mod error;
mod storage;

pub use error::LogError;
pub use storage::{JsonFileStorage, KvStorage, MemoryStorage, StorageError};

use chrono::Utc;
use tracing::debug;

use crate::models::{EntryDraft, LogEntry};

/// Storage key for the persisted log collection.
pub const FOOD_LOGS_KEY: &str = "foodLogs";

/// Owns the ordered meal log and its persistence.
pub struct LogStore {
    storage: Box<dyn KvStorage>,
    entries: Vec<LogEntry>,
}

impl LogStore {
    /// Creates a store with an empty in-memory snapshot. No I/O happens
    /// until [`load`](Self::load) or a mutation is called.
    pub fn new(storage: Box<dyn KvStorage>) -> Self {
        Self {
            storage,
            entries: Vec::new(),
        }
    }

    /// Reads the persisted collection into memory and returns it.
    ///
    /// An absent record loads as an empty sequence and writes nothing.
    /// An unreadable backend fails with [`LogError::StorageRead`]; a
    /// record that exists but does not parse fails with
    /// [`LogError::Parse`]. Loading twice without intervening mutation
    /// returns equal sequences.
    pub async fn load(&mut self) -> Result<&[LogEntry], LogError> {
        let raw = self
            .storage
            .read(FOOD_LOGS_KEY)
            .await
            .map_err(LogError::StorageRead)?;

        self.entries = match raw {
            Some(text) => serde_json::from_str(&text)?,
            None => Vec::new(),
        };

        debug!(count = self.entries.len(), "loaded food logs");
        Ok(&self.entries)
    }

    /// Validates the draft, stamps the current instant, appends the entry,
    /// and persists the full collection.
    ///
    /// Fails with [`LogError::Validation`] (and no state change) if the
    /// meal name is empty or the calories text does not parse as a
    /// non-negative integer. A failed persist rolls the append back so the
    /// in-memory snapshot matches what is on disk.
    pub async fn append(&mut self, draft: EntryDraft) -> Result<LogEntry, LogError> {
        let meal_name = draft.meal_name.trim();
        if meal_name.is_empty() {
            return Err(LogError::Validation("meal name is required".to_string()));
        }

        let calories_text = draft.calories.trim();
        if calories_text.is_empty() {
            return Err(LogError::Validation("calories are required".to_string()));
        }
        let calories: u32 = calories_text.parse().map_err(|_| {
            LogError::Validation(format!(
                "calories must be a non-negative whole number, got '{}'",
                draft.calories
            ))
        })?;

        let entry = LogEntry {
            meal_type: draft.meal_type,
            meal_name: meal_name.to_string(),
            calories,
            date: Utc::now(),
        };

        self.entries.push(entry.clone());
        if let Err(e) = self.persist().await {
            self.entries.pop();
            return Err(e);
        }

        Ok(entry)
    }

    /// Removes the entry at `index` and persists the result.
    ///
    /// Later entries shift down by one; callers must not cache indices
    /// across structural changes. A failed persist restores the entry.
    pub async fn delete(&mut self, index: usize) -> Result<(), LogError> {
        if index >= self.entries.len() {
            return Err(LogError::IndexOutOfRange {
                index,
                len: self.entries.len(),
            });
        }

        let removed = self.entries.remove(index);
        if let Err(e) = self.persist().await {
            self.entries.insert(index, removed);
            return Err(e);
        }

        Ok(())
    }

    /// Read-only snapshot of the current in-memory state. No I/O.
    pub fn all(&self) -> &[LogEntry] {
        &self.entries
    }

    async fn persist(&self) -> Result<(), LogError> {
        let text = serde_json::to_string(&self.entries)?;
        self.storage
            .write(FOOD_LOGS_KEY, &text)
            .await
            .map_err(LogError::StorageWrite)?;

        debug!(count = self.entries.len(), "persisted food logs");
        Ok(())
    }
}
