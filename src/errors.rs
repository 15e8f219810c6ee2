//! Shared error types for the application.
//!
//! Text analysis itself is total and never returns an error. These variants
//! cover everything around it: configuration, output, and the injected
//! backend that stores stories and sticky notes.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for storyscribe operations
#[derive(Debug, Error)]
pub enum Error {
    /// File system related errors
    #[error("File system error: {message}")]
    FileSystem {
        message: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Input validation errors (blank titles, bad thresholds)
    #[error("Validation error: {0}")]
    Validation(String),

    /// No signed-in user for a user-scoped operation
    #[error("User not authenticated")]
    NotAuthenticated,

    /// A record that should exist was not found for the current user
    #[error("No record '{id}' in {collection}")]
    NotFound { collection: String, id: String },

    /// Failures reported by the backend service
    #[error("Backend error: {0}")]
    Backend(String),

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Wrap an io error with the path it occurred on
    pub fn io_at(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self::FileSystem {
            message: format!("{}: {}", path.display(), source),
            path,
            source,
        }
    }

    pub fn not_found(collection: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            collection: collection.into(),
            id: id.into(),
        }
    }

    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend(message.into())
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;
