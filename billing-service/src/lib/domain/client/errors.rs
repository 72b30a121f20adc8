use thiserror::Error;

use crate::domain::user::errors::EmailError;

/// Error for ClientName validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClientNameError {
    #[error("Client name too short: minimum {min} characters, got {actual}")]
    TooShort { min: usize, actual: usize },

    #[error("Client name too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Error for PhoneNumber validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PhoneNumberError {
    #[error("Phone number too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Top-level error for client operations
#[derive(Debug, Clone, Error)]
pub enum ClientError {
    #[error("Invalid client name: {0}")]
    InvalidName(#[from] ClientNameError),

    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    #[error("Invalid phone number: {0}")]
    InvalidPhone(#[from] PhoneNumberError),

    #[error("Client not found: {0}")]
    NotFound(i64),

    #[error("Client name already exists: {0}")]
    NameAlreadyExists(String),

    #[error("Email already exists: {0}")]
    EmailAlreadyExists(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
