use thiserror::Error;

use crate::domain::client::errors::ClientError;

/// Error for Subject validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SubjectError {
    #[error("Complaint subject must not be empty")]
    Empty,

    #[error("Complaint subject too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Error for Description validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DescriptionError {
    #[error("Complaint description must not be empty")]
    Empty,

    #[error("Complaint description too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Error for ComplaintStatus parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ComplaintStatusParseError {
    #[error("Unknown complaint status: {0}")]
    Unknown(String),
}

/// Top-level error for complaint operations
#[derive(Debug, Clone, Error)]
pub enum ComplaintError {
    #[error("Invalid complaint subject: {0}")]
    InvalidSubject(#[from] SubjectError),

    #[error("Invalid complaint description: {0}")]
    InvalidDescription(#[from] DescriptionError),

    #[error("Complaint not found: {0}")]
    NotFound(i64),

    #[error("Client not found: {0}")]
    ClientNotFound(i64),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<ClientError> for ComplaintError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::NotFound(id) => ComplaintError::ClientNotFound(id),
            other => ComplaintError::DatabaseError(other.to_string()),
        }
    }
}
