//! Error types for the clubcal ecosystem.

use thiserror::Error;

/// Errors that can occur in clubcal operations.
#[derive(Error, Debug)]
pub enum ClubcalError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Event not found: {0}")]
    EventNotFound(String),

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid date '{0}'. Expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Invalid month '{0}'. Expected YYYY-MM")]
    InvalidMonth(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for clubcal operations.
pub type ClubcalResult<T> = Result<T, ClubcalError>;
