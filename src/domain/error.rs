use std::io;

use thiserror::Error;

/// Library-wide error type for escomp operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Storage root was neither passed on the command line nor set in the environment.
    #[error("Storage root not set. Pass --storage-root or set ESCOMP_STORAGE_ROOT")]
    StorageRootMissing,

    /// Storage root string is empty.
    #[error("Storage root must not be empty")]
    EmptyStorageRoot,

    /// System identifier is invalid.
    #[error("Invalid system id '{0}': must be non-empty with no path separators")]
    InvalidSystemId(String),

    /// Preference key is not part of the closed key table.
    #[error("Unknown preference key '{key}'. Valid keys: {available}")]
    UnknownPreferenceKey { key: String, available: String },

    /// Preference value does not parse as the type the key requires.
    #[error("Invalid value '{value}' for preference '{key}': expected {expected}")]
    InvalidPreferenceValue { key: String, value: String, expected: &'static str },

    /// Preference file exists but is not valid TOML.
    #[error("Malformed preference file: {0}")]
    MalformedPreferences(String),
}
