//! Common error types for showbook

use thiserror::Error;

/// Common result type for showbook operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error taxonomy shared by the data layer and the web handlers
#[derive(Error, Debug)]
pub enum Error {
    /// Database operation error (wraps sqlx::Error)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Requested venue, artist or show does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Submitted form data is missing a field or malformed
    #[error("Invalid submission: {0}")]
    Validation(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// True for errors caused by the submitted data rather than storage
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_))
    }
}
