use thiserror::Error;

/// Error type for token operations.
///
/// Callers enforcing authentication collapse every decode variant into one
/// outward "authentication required" signal; the variants exist for logging.
#[derive(Debug, Clone, Error)]
pub enum TokenError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Token is expired")]
    Expired,

    #[error("Token is invalid: {0}")]
    Invalid(String),
}
