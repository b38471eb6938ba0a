//! Custom error types for Dolla
//!
//! Only contract violations and I/O problems are errors. Bad individual
//! records are never errors; they are reported through
//! [`crate::diagnostics::Diagnostics`] instead.

use thiserror::Error;

/// The main error type for Dolla operations
#[derive(Error, Debug)]
pub enum DollaError {
    /// Configuration-related errors (settings file, paths)
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for patches and user input
    #[error("Validation error: {0}")]
    Validation(String),

    /// A budget that cannot be evaluated (negative ceiling, income category)
    #[error("Invalid budget {id}: {reason}")]
    InvalidBudget { id: String, reason: String },

    /// The snapshot does not have the expected shape
    #[error("Snapshot error: {0}")]
    Snapshot(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },
}

impl DollaError {
    /// Create an "invalid budget" error
    pub fn invalid_budget(id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidBudget {
            id: id.into(),
            reason: reason.into(),
        }
    }

    /// Create a "not found" error for accounts
    pub fn account_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Account",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this error was caused by invalid input rather than the environment
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::InvalidBudget { .. })
    }
}

impl From<std::io::Error> for DollaError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for DollaError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for DollaError {
    fn from(err: csv::Error) -> Self {
        Self::Export(err.to_string())
    }
}

impl From<serde_yaml::Error> for DollaError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Export(err.to_string())
    }
}

/// Result type alias for Dolla operations
pub type DollaResult<T> = Result<T, DollaError>;
