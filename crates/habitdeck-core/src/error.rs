//! Core error types for habitdeck-core.
//!
//! This module defines the error hierarchy using thiserror. Not-found
//! conditions (unknown habit id on toggle/delete, date outside the day
//! window) are deliberately NOT errors; they are no-ops or absence values.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for habitdeck-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Habit-collection persistence errors
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Document store errors
    #[error("Document store error: {0}")]
    Document(#[from] DocumentError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Errors from the habit-collection JSON file.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Failed to read the collection file
    #[error("Failed to read {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the collection file
    #[error("Failed to write {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Persisted payload is not a JSON array of habit records.
    /// There is no recovery path; the caller sees this as a fatal load.
    #[error("Malformed habit collection at {path}: {source}")]
    ParseFailed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Could not resolve the data directory
    #[error("Failed to resolve data directory: {0}")]
    DataDir(String),
}

/// Document-store-specific errors.
#[derive(Error, Debug)]
pub enum DocumentError {
    /// Failed to open the database
    #[error("Failed to open document store at {path}: {source}")]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// Query execution failed
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Document body was empty or not a JSON object
    #[error("Document body must be a non-empty JSON object")]
    EmptyBody,

    /// Stored document body is not valid JSON
    #[error("Stored document '{id}' has a corrupt body: {source}")]
    CorruptBody {
        id: String,
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

    /// Unknown configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Failed to parse a configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

impl From<rusqlite::Error> for DocumentError {
    fn from(err: rusqlite::Error) -> Self {
        DocumentError::QueryFailed(err.to_string())
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
