//! Core error types for deskkit-core.
//!
//! Storage and decode failures are normally swallowed by the fail-soft
//! [`Store`](crate::storage::Store) adapter and only reach callers through the
//! `try_*` variants. Validation failures always surface to the caller.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for deskkit-core.
///
/// Returned where one call can fail in more than one layer, such as opening
/// the configured store.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Storage-layer errors
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// User-input validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// Key-value backend errors.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Failed to open the backing database
    #[error("Failed to open store at {path}: {source}")]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// Query execution failed
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Database is locked
    #[error("Store is locked")]
    Locked,

    /// Write would push the store past its byte quota
    #[error("Quota exceeded writing '{key}': {needed} bytes needed, {limit} allowed")]
    QuotaExceeded {
        key: String,
        needed: usize,
        limit: usize,
    },

    /// Storage has been disabled or is otherwise unreachable
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    /// Value could not be encoded as JSON
    #[error("Failed to encode value for '{key}': {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// Stored text could not be decoded into the requested shape
    #[error("Failed to decode value for '{key}': {source}")]
    Decode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Dot-path key does not name a config field
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

/// Validation errors raised by widget mutations.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field was empty after trimming
    #[error("'{0}' must not be empty")]
    EmptyField(&'static str),

    /// Short code is already taken in the shortener list
    #[error("Short code '{0}' already exists, choose a different one")]
    DuplicateShortCode(String),

    /// Url could not be parsed
    #[error("Invalid url '{url}': {message}")]
    InvalidUrl { url: String, message: String },

    /// No record with the given id in the collection
    #[error("No {collection} entry with id '{id}'")]
    NotFound {
        collection: &'static str,
        id: String,
    },

    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

impl From<rusqlite::Error> for StorageError {
    fn from(err: rusqlite::Error) -> Self {
        match &err {
            rusqlite::Error::SqliteFailure(code, _msg) => match code.code {
                rusqlite::ErrorCode::DatabaseLocked | rusqlite::ErrorCode::DatabaseBusy => {
                    StorageError::Locked
                }
                rusqlite::ErrorCode::DiskFull => StorageError::QuotaExceeded {
                    key: String::new(),
                    needed: 0,
                    limit: 0,
                },
                rusqlite::ErrorCode::ReadOnly | rusqlite::ErrorCode::CannotOpen => {
                    StorageError::Unavailable(err.to_string())
                }
                _ => StorageError::QueryFailed(err.to_string()),
            },
            _ => StorageError::QueryFailed(err.to_string()),
        }
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_converts_into_core_error() {
        let err: CoreError = ValidationError::EmptyField("text").into();
        assert!(matches!(err, CoreError::Validation(ValidationError::EmptyField("text"))));
        assert_eq!(err.to_string(), "Validation error: 'text' must not be empty");
    }

    #[test]
    fn storage_error_converts_into_core_error() {
        let err: CoreError = StorageError::Locked.into();
        assert!(matches!(err, CoreError::Storage(StorageError::Locked)));
        assert_eq!(err.to_string(), "Storage error: Store is locked");
    }

    #[test]
    fn quota_message_names_key() {
        let err = StorageError::QuotaExceeded {
            key: "notes".into(),
            needed: 120,
            limit: 64,
        };
        assert!(err.to_string().contains("'notes'"));
    }
}
