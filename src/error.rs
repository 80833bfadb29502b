//! Error Types

use thiserror::Error;

/// Failures of the key-value storage backend
#[derive(Debug, Error)]
pub enum StorageError {
    /// No window or no `localStorage` (private mode, sandboxed iframe, native target)
    #[error("storage is unavailable")]
    Unavailable,
    #[error("failed to read key {key}: {reason}")]
    Read { key: String, reason: String },
    /// Usually quota exhaustion
    #[error("failed to write key {key}: {reason}")]
    Write { key: String, reason: String },
    #[error("failed to serialize tasks: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Reasons a persisted value is discarded instead of restored
#[derive(Debug, Error)]
pub enum RestoreError {
    #[error("persisted tasks are not valid: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("persisted tasks contain duplicate id {0}")]
    DuplicateId(String),
    #[error("persisted tasks contain an empty id")]
    EmptyId,
    #[error("persisted task {0} has an empty name")]
    EmptyName(String),
}
