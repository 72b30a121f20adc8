use thiserror::Error;

use crate::domain::client::errors::ClientError;

/// Error for InvoiceNumber validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InvoiceNumberError {
    #[error("Invoice number must not be empty")]
    Empty,

    #[error("Invoice number too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Error for InvoiceAmount validation failures
#[derive(Debug, Clone, Error, PartialEq)]
pub enum InvoiceAmountError {
    #[error("Invoice amount must be strictly positive, got {0}")]
    NotPositive(f64),
}

/// Error for InvoiceStatus parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InvoiceStatusParseError {
    #[error("Unknown invoice status: {0}")]
    Unknown(String),
}

/// Top-level error for invoice operations
#[derive(Debug, Clone, Error)]
pub enum InvoiceError {
    #[error("Invalid invoice number: {0}")]
    InvalidNumber(#[from] InvoiceNumberError),

    #[error("Invalid invoice amount: {0}")]
    InvalidAmount(#[from] InvoiceAmountError),

    #[error("Invoice not found: {0}")]
    NotFound(i64),

    #[error("Invoice number already exists: {0}")]
    NumberAlreadyExists(String),

    #[error("Client not found: {0}")]
    ClientNotFound(i64),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<ClientError> for InvoiceError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::NotFound(id) => InvoiceError::ClientNotFound(id),
            other => InvoiceError::DatabaseError(other.to_string()),
        }
    }
}
