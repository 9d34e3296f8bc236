//! Core error types for quietbridge-core.
//!
//! Ledger queries are total and never fail; these errors cover the
//! caller-facing edges: configuration, on-disk storage and input validation.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for quietbridge-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Storage-related errors
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
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

    /// Key does not exist in the configuration tree
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

/// Errors from the JSON data files.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Data directory could not be resolved or created
    #[error("Data directory unavailable: {0}")]
    DataDirUnavailable(String),

    /// Writing a data file failed
    #[error("Failed to write {path}: {message}")]
    WriteFailed { path: PathBuf, message: String },
}

/// Validation errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Mood word missing on save
    #[error("Pick a mood word first")]
    EmptyMood,

    /// Date string is not `YYYY-MM-DD`
    #[error("Invalid date '{value}': expected YYYY-MM-DD")]
    InvalidDate { value: String },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
