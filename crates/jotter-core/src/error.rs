//! Error types for jotter.

use thiserror::Error;

/// Result type alias using jotter's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for jotter operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Store could not be opened or failed its liveness probe
    #[error("Connection error: {0}")]
    Connection(#[source] sqlx::Error),

    /// Schema bootstrap failed
    #[error("Migration error: {0}")]
    Migration(String),

    /// Required field missing or empty
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// No row matches the given identifier
    #[error("Not found: {0}")]
    NotFound(String),

    /// Read statement failed
    #[error("Query error: {0}")]
    Query(#[source] sqlx::Error),

    /// Insert, update or delete failed
    #[error("Write error: {0}")]
    Write(#[source] sqlx::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// File or socket I/O failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// True when the error means "no such note".
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }
}
