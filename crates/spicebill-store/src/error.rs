//! # Store Error Types
//!
//! Error types for document persistence.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  I/O error (std::io::Error) / parse error (serde_json::Error)          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Adds the document key for context          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiError (in gateway) ← Serialized for HTTP clients                   │
//! │                                                                         │
//! │  Domain errors (CoreError) pass through unchanged so the gateway can   │
//! │  distinguish a rejected operation from a storage failure.              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use spicebill_core::CoreError;
use thiserror::Error;

/// Document persistence errors.
///
/// The `Core` variant carries recoverable domain rejections (duplicate
/// customer, negative price, ...); everything else is a storage failure
/// that is fatal to the in-flight operation. A failed save never leaves
/// a half-written document - the prior version stays intact on disk.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A domain rule rejected the operation. State is unchanged.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Reading or writing the document file failed.
    ///
    /// ## When This Occurs
    /// - Data directory missing or unwritable
    /// - Disk full during a save
    /// - Permissions problem on an existing document
    #[error("I/O error on document '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// A stored document exists but does not parse against its schema.
    ///
    /// ## When This Occurs
    /// - Hand-edited JSON with a syntax error
    /// - A document written by an incompatible version
    ///
    /// No auto-repair is attempted: the operator must fix or remove the
    /// file. Loading must never guess at corrupted ledger data.
    #[error("Document '{key}' is malformed: {source}")]
    Malformed {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// Serializing a document for writing failed.
    ///
    /// Practically unreachable for these types, but kept distinct from
    /// `Malformed` so a load problem is never mistaken for a save problem.
    #[error("Failed to serialize document '{key}': {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

impl StoreError {
    /// Creates an Io error with document-key context.
    pub fn io(key: impl Into<String>, source: std::io::Error) -> Self {
        StoreError::Io {
            key: key.into(),
            source,
        }
    }

    /// Creates a Malformed error with document-key context.
    pub fn malformed(key: impl Into<String>, source: serde_json::Error) -> Self {
        StoreError::Malformed {
            key: key.into(),
            source,
        }
    }

    /// True when the error is a recoverable domain rejection rather than
    /// a storage failure.
    pub fn is_domain(&self) -> bool {
        matches!(self, StoreError::Core(_))
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_errors_pass_through() {
        let err: StoreError = CoreError::DuplicateCustomer("Ravi".to_string()).into();
        assert!(err.is_domain());
        assert_eq!(err.to_string(), "Customer already exists: Ravi");
    }

    #[test]
    fn test_io_error_includes_key() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = StoreError::io("payments", io);
        assert!(!err.is_domain());
        assert!(err.to_string().contains("payments"));
    }
}
