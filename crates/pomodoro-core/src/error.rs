//! Core error types for pomodoro-core.
//!
//! None of these are fatal: callers degrade to defaults or to the prior value
//! and surface the error as a log line.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for pomodoro-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Settings persistence errors
    #[error("Settings error: {0}")]
    Settings(#[from] SettingsError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// Settings-store errors.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// No record on disk. Benign: defaults are used.
    #[error("No settings file at {path}")]
    FileNotFound { path: PathBuf },

    /// The record exists but is not a well-formed settings object.
    #[error("Failed to parse settings at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Reading, writing or removing the file failed.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize settings: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Validation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Durations must be at least one minute.
    #[error("Invalid duration for '{field}': {minutes} minutes (must be positive)")]
    InvalidDuration { field: &'static str, minutes: u32 },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
