use chrono::Duration;
use jsonwebtoken::Algorithm;

use crate::jwt::Claims;
use crate::jwt::JwtCodec;
use crate::jwt::TokenError;
use crate::password::PasswordError;
use crate::password::PasswordHasher;
use crate::role::Role;

/// Authentication coordinator combining password verification and token
/// issuance.
///
/// Immutable once constructed; concurrent requests share it freely.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    codec: JwtCodec,
    token_ttl: Duration,
}

/// Result of successful authentication.
pub struct AuthenticationResult {
    /// Signed access token
    pub access_token: String,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    Password(#[from] PasswordError),

    #[error("Token error: {0}")]
    Token(#[from] TokenError),
}

impl Authenticator {
    /// Create a new authenticator.
    ///
    /// # Arguments
    /// * `jwt_secret` - Secret key for token signing; the service validates
    ///   it is non-empty at startup
    /// * `algorithm` - HMAC signing algorithm
    /// * `token_ttl` - Lifetime of issued tokens
    pub fn new(jwt_secret: &[u8], algorithm: Algorithm, token_ttl: Duration) -> Self {
        Self {
            password_hasher: PasswordHasher::new(),
            codec: JwtCodec::with_algorithm(jwt_secret, algorithm),
            token_ttl,
        }
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Report whether a stored hash uses a deprecated scheme.
    pub fn password_needs_rehash(&self, hash: &str) -> bool {
        self.password_hasher.needs_rehash(hash)
    }

    /// Verify credentials and issue an access token for the subject.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `stored_hash` - Stored password hash
    /// * `subject` - Username the token asserts
    /// * `role` - Role claim carried by the token
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match (or the stored hash
    ///   is malformed; the two are indistinguishable to the caller)
    /// * `Token` - Token generation failed
    pub fn login(
        &self,
        password: &str,
        stored_hash: &str,
        subject: &str,
        role: Role,
    ) -> Result<AuthenticationResult, AuthenticationError> {
        if !self.password_hasher.verify(password, stored_hash) {
            return Err(AuthenticationError::InvalidCredentials);
        }

        let access_token = self.issue_token(subject, role)?;

        Ok(AuthenticationResult { access_token })
    }

    /// Issue an access token without password verification.
    ///
    /// For callers that have already proven the subject's identity by other
    /// means.
    ///
    /// # Errors
    /// * `TokenError` - Token generation failed
    pub fn issue_token(&self, subject: &str, role: Role) -> Result<String, TokenError> {
        let claims = Claims::new(subject, role, self.token_ttl);
        self.codec.encode(&claims)
    }

    /// Validate an access token and return its claims.
    ///
    /// # Errors
    /// * `TokenError` - Token is malformed, mis-signed, or expired
    pub fn validate_token(&self, token: &str) -> Result<Claims, TokenError> {
        self.codec.decode(token)
    }
}
