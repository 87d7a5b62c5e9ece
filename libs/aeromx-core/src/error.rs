//! Error types for the aeromx core library

use thiserror::Error;

/// Result type alias for aeromx operations
pub type Result<T> = std::result::Result<T, AeromxError>;

/// Main error type for aeromx operations
#[derive(Error, Debug)]
pub enum AeromxError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Database not found: {path}")]
    DatabaseNotFound { path: String },

    #[error("Invalid UUID: {uuid}")]
    InvalidUuid { uuid: String },

    #[error("Invalid date: {date}")]
    InvalidDate { date: String },

    #[error("Maintenance task not found: {uuid}")]
    TaskNotFound { uuid: String },

    #[error("Aircraft not found: {ident}")]
    AircraftNotFound { ident: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl AeromxError {
    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}
