//! Error types for the carousel's I/O boundaries.
//!
//! None of these escape a carousel operation: the controller catches every
//! one of them, logs it, and degrades to a well-defined state (cache miss,
//! empty carousel, or unchanged favorites).

use thiserror::Error;

/// Errors reading or writing the persistent store.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying file operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A stored record is not valid JSON for its slot. Callers treat this as
    /// an absent record.
    #[error("Malformed record {key}: {source}")]
    Malformed {
        /// Slot the record was read from.
        key: &'static str,
        /// Parse failure.
        #[source]
        source: serde_json::Error,
    },

    /// A value could not be serialized.
    #[error("Encode error: {0}")]
    Encode(#[source] serde_json::Error),

    /// Key contains characters the backend cannot store.
    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    /// A writer panicked while holding the store lock.
    #[error("Storage lock poisoned")]
    Poisoned,
}

/// Errors fetching the remote product document.
#[derive(Debug, Error)]
pub enum FetchError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Remote answered with a non-success status.
    #[error("Unexpected HTTP status: {0}")]
    Status(reqwest::StatusCode),

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Source-specific failure (test doubles, alternate transports).
    #[error("Source unavailable: {0}")]
    Unavailable(String),
}

/// A load cycle failed and the carousel fell back to empty.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Fetch failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("Write-through failed: {0}")]
    Storage(#[from] StorageError),
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_error_display() {
        let err = StorageError::InvalidKey("../etc".to_string());
        assert_eq!(err.to_string(), "Invalid storage key: ../etc");
    }

    #[test]
    fn test_malformed_names_slot() {
        let source = serde_json::from_str::<Vec<u8>>("not json").unwrap_err();
        let err = StorageError::Malformed {
            key: "carouselProducts",
            source,
        };
        assert!(err.to_string().starts_with("Malformed record carouselProducts:"));
    }

    #[test]
    fn test_fetch_error_display() {
        let err = FetchError::Status(reqwest::StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Unexpected HTTP status: 404 Not Found");
    }

    #[test]
    fn test_load_error_wraps_sources() {
        let err: LoadError = FetchError::Unavailable("offline".to_string()).into();
        assert_eq!(
            err.to_string(),
            "Fetch failed: Source unavailable: offline"
        );

        let err: LoadError = StorageError::Poisoned.into();
        assert_eq!(err.to_string(), "Write-through failed: Storage lock poisoned");
    }
}
