//! Crate-wide error type
//!
//! Every fallible operation returns [`ZenithResult`]. Variants separate what
//! the user got wrong (`InvalidInput`, `NotFound`) from what the machine got
//! wrong (`Io`, `Json`, `Storage`), so the CLI can phrase each kind sensibly.

use thiserror::Error;

/// Result type alias used throughout zenith-fin
pub type ZenithResult<T> = Result<T, ZenithError>;

#[derive(Error, Debug)]
pub enum ZenithError {
    /// Rejected user input (empty description, non-positive amount, ...)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Lookup by id or prefix that resolved to nothing
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Config directory resolution or settings problems
    #[error("Configuration error: {0}")]
    Config(String),

    /// Filesystem access failed
    #[error("I/O error: {0}")]
    Io(String),

    /// A data file did not hold the JSON we expected
    #[error("JSON error: {0}")]
    Json(String),

    /// CSV, JSON or YAML export failed
    #[error("Export error: {0}")]
    Export(String),

    /// Repository-level failures, including poisoned locks
    #[error("Storage error: {0}")]
    Storage(String),
}

impl ZenithError {
    pub fn goal_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Goal",
            identifier: identifier.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}

// Conversions from library errors. Each maps onto the variant whose wording
// tells the user where the failure happened.

impl From<std::io::Error> for ZenithError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ZenithError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for ZenithError {
    fn from(err: csv::Error) -> Self {
        Self::Export(err.to_string())
    }
}

impl From<serde_yaml::Error> for ZenithError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Export(err.to_string())
    }
}
