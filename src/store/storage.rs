//! Key-value storage backends for persisted records.
//!
//! Each record is one serialized value under one key. The backend is a
//! trait so the log can be kept in a file, in memory, or anywhere else
//! without touching call sites.

use async_trait::async_trait;
use std::collections::HashMap;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::Mutex;

/// Errors that can occur in a storage backend.
#[derive(Error, Debug)]
pub enum StorageError {
    /// I/O error reading or writing a record.
    #[error("I/O error for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// A minimal key-value store: one text value per key.
///
/// Reads and writes are whole-value; there is no partial update. A key
/// that was never written reads as `None`.
#[async_trait]
pub trait KvStorage: Send + Sync {
    async fn read(&self, key: &str) -> Result<Option<String>, StorageError>;
    async fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// File-backed storage: each key is stored as `<data_dir>/<key>.json`.
///
/// The data directory is created on first write.
#[derive(Clone)]
pub struct JsonFileStorage {
    data_dir: PathBuf,
}

impl JsonFileStorage {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &PathBuf {
        &self.data_dir
    }

    /// Returns the full path for a key.
    pub fn path(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{}.json", key))
    }
}

#[async_trait]
impl KvStorage for JsonFileStorage {
    async fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path(key);

        match tokio::fs::read_to_string(&path).await {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Io { path, source: e }),
        }
    }

    async fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        tokio::fs::create_dir_all(&self.data_dir)
            .await
            .map_err(|e| StorageError::Io {
                path: self.data_dir.clone(),
                source: e,
            })?;

        let path = self.path(key);
        tokio::fs::write(&path, value)
            .await
            .map_err(|e| StorageError::Io { path, source: e })
    }
}

/// In-memory storage for tests and ephemeral use.
///
/// Clones share the same underlying map.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    records: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KvStorage for MemoryStorage {
    async fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let records = self.records.lock().await;
        Ok(records.get(key).cloned())
    }

    async fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut records = self.records.lock().await;
        records.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
