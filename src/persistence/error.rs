//! Persistence error types.

use thiserror::Error;

/// Errors raised by a storage backend.
///
/// A failed write leaves the controller's in-memory state authoritative;
/// the next successful save brings durable state back in line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Reading or writing the underlying medium failed
    #[error("Storage I/O failed: {0}")]
    Io(String),

    /// A value could not be encoded for storage
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    /// The backend refuses writes (see `MemoryBackend::read_only`)
    #[error("Storage is read-only")]
    ReadOnly,
}

impl From<std::io::Error> for StoreError {
    fn from(error: std::io::Error) -> Self {
        Self::Io(error.to_string())
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(error: serde_json::Error) -> Self {
        Self::SerializationFailed(error.to_string())
    }
}
