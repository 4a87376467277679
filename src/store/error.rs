//! Food log error types.

use thiserror::Error;

use super::storage::StorageError;

/// Errors that can occur during food log operations.
///
/// A corrupt stored record surfaces as [`LogError::Parse`], distinct from
/// "no logs yet" (which loads as an empty sequence) — the caller decides
/// how to react instead of having the failure masked.
#[derive(Error, Debug)]
pub enum LogError {
    /// Missing or invalid entry fields; nothing was written.
    #[error("{0}")]
    Validation(String),
    /// Positional delete outside the current sequence.
    #[error("no entry at index {index} (the log has {len} entries)")]
    IndexOutOfRange { index: usize, len: usize },
    /// The stored record exists but is not a valid log collection.
    #[error("stored food logs are corrupt: {0}")]
    Parse(#[from] serde_json::Error),
    /// The storage backend failed to read the record.
    #[error("failed to read food logs: {0}")]
    StorageRead(#[source] StorageError),
    /// The storage backend failed to persist the record.
    #[error("failed to write food logs: {0}")]
    StorageWrite(#[source] StorageError),
}
