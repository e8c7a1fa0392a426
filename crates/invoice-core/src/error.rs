//! Error types for the invoice entry workflow.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for every invoice crate.
///
/// Missing required fields are not errors: they are reported through
/// [`crate::validation::ValidationErrorSet`]. Malformed persisted state is
/// healed inside the stores and never escapes as a value of this type.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvoiceError {
    /// The durable store could not be read or written.
    #[error("Storage unavailable for '{key}': {message}")]
    StorageUnavailable { key: String, message: String },

    /// Persisted content did not match the expected shape.
    #[error("Malformed persisted state under '{key}': {message}")]
    MalformedState { key: String, message: String },

    /// A textual field path did not address an existing field.
    #[error("Invalid field path '{path}': {reason}")]
    InvalidFieldPath { path: String, reason: String },

    /// IO error outside the durable store (e.g. reading an attachment)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization { format: String, message: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl InvoiceError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a StorageUnavailable error for the given key.
    pub fn storage_unavailable(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::StorageUnavailable {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Creates a MalformedState error for the given key.
    pub fn malformed(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MalformedState {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Creates an InvalidFieldPath error.
    pub fn invalid_path(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidFieldPath {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is a StorageUnavailable error
    pub fn is_storage_unavailable(&self) -> bool {
        matches!(self, Self::StorageUnavailable { .. })
    }

    /// Check if this is a MalformedState error
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedState { .. })
    }

    /// Check if this is an InvalidFieldPath error
    pub fn is_invalid_path(&self) -> bool {
        matches!(self, Self::InvalidFieldPath { .. })
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for InvoiceError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for InvoiceError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, InvoiceError>`.
pub type Result<T> = std::result::Result<T, InvoiceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_unavailable_display() {
        let err = InvoiceError::storage_unavailable("invoiceForm", "disk full");
        assert!(err.is_storage_unavailable());
        assert_eq!(
            err.to_string(),
            "Storage unavailable for 'invoiceForm': disk full"
        );
    }

    #[test]
    fn test_predicates_match_only_their_variant() {
        let err = InvoiceError::malformed("invoiceForm", "expected object");
        assert!(err.is_malformed());
        assert!(!err.is_storage_unavailable());
        assert!(!err.is_invalid_path());
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: InvoiceError = json_err.into();
        assert!(matches!(err, InvoiceError::Serialization { ref format, .. } if format == "JSON"));
    }
}
