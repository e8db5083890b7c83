//! Error types for the nutrilog engine.

use thiserror::Error;

/// Failures reported by a [`KeyValueStorage`](crate::KeyValueStorage) backend.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("storage io error: {0}")]
    Io(String),
}

/// All possible errors from the nutrilog engine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    // Read errors (recovered locally, never surfaced by the get_* operations)
    #[error("failed to read '{key}': {reason}")]
    StorageRead { key: String, reason: String },

    #[error("malformed value at '{key}': {reason}")]
    Malformed { key: String, reason: String },

    // Write errors (surfaced to the caller)
    #[error("failed to write '{key}': {reason}")]
    StorageWrite { key: String, reason: String },

    #[error("failed to encode value: {0}")]
    Encode(String),

    // Export / import
    #[error("invalid snapshot: {0}")]
    InvalidSnapshot(String),
}

impl Error {
    pub(crate) fn read(key: &str, err: StorageError) -> Self {
        Error::StorageRead {
            key: key.to_string(),
            reason: err.to_string(),
        }
    }

    pub(crate) fn write(key: &str, err: StorageError) -> Self {
        Error::StorageWrite {
            key: key.to_string(),
            reason: err.to_string(),
        }
    }

    /// True for errors that the read path recovers from with a default value.
    pub fn is_read_failure(&self) -> bool {
        matches!(self, Error::StorageRead { .. } | Error::Malformed { .. })
    }

    /// True for errors where the caller must assume nothing was persisted.
    pub fn is_write_failure(&self) -> bool {
        matches!(self, Error::StorageWrite { .. } | Error::Encode(_))
    }
}

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = Error::StorageWrite {
            key: "user_settings".into(),
            reason: "disk full".into(),
        };
        assert_eq!(err.to_string(), "failed to write 'user_settings': disk full");

        let err = Error::read("saved_recipes", StorageError::Unavailable("locked".into()));
        assert_eq!(
            err.to_string(),
            "failed to read 'saved_recipes': storage unavailable: locked"
        );
    }

    #[test]
    fn classification() {
        let read = Error::Malformed {
            key: "history_entries".into(),
            reason: "expected value".into(),
        };
        assert!(read.is_read_failure());
        assert!(!read.is_write_failure());

        let write = Error::write("daily_log_2024-01-01", StorageError::Io("denied".into()));
        assert!(write.is_write_failure());
        assert!(!write.is_read_failure());

        assert!(!Error::InvalidSnapshot("bad".into()).is_read_failure());
    }
}
