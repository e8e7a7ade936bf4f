//! Shared error types for the library

use std::path::PathBuf;
use thiserror::Error;

use super::AlertId;

/// Main error type for insider-risk operations
#[derive(Debug, Error)]
pub enum Error {
    /// A submission or record violated the caller contract
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A risk tier string outside `High`, `Medium`, `Low`
    #[error("Unknown risk tier '{0}' (expected High, Medium or Low)")]
    UnknownRiskTier(String),

    /// Isolation of an id the store does not hold
    #[error("No alert with id {0}")]
    AlertNotFound(AlertId),

    /// Alert history snapshot is malformed
    #[error("History error in {path}: {message}")]
    History { path: PathBuf, message: String },

    /// Generic errors with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// TOML errors
    #[error(transparent)]
    TomlParse(#[from] toml::de::Error),
}

impl Error {
    /// Create a history error with path context
    pub fn history(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::History {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        Self::WithContext {
            context: context.into(),
            message: self.to_string(),
        }
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }
}
