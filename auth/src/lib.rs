//! Authentication utilities library
//!
//! Provides the authentication infrastructure for the billing backend:
//! - Password hashing (Argon2id)
//! - JWT access token generation and validation
//! - Role enumeration carried in tokens
//! - Authentication coordination
//!
//! The service crate defines its own authorization pipeline on top and adapts
//! these implementations through its domain ports.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! assert!(!hasher.verify("wrong_password", &hash));
//! ```
//!
//! ## JWT Tokens
//! ```
//! use auth::{Claims, JwtCodec, Role};
//! use chrono::Duration;
//!
//! let codec = JwtCodec::new(b"secret_key_at_least_32_bytes_long!");
//! let claims = Claims::new("alice", Role::User, Duration::minutes(30));
//! let token = codec.encode(&claims).unwrap();
//! let decoded = codec.decode(&token).unwrap();
//! assert_eq!(decoded.sub, "alice");
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::{Authenticator, Role};
//! use chrono::Duration;
//!
//! let auth = Authenticator::new(
//!     b"secret_key_at_least_32_bytes_long!",
//!     auth::Algorithm::HS256,
//!     Duration::minutes(30),
//! );
//!
//! // Register: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and generate token
//! let result = auth.login("password123", &hash, "alice", Role::User).unwrap();
//!
//! // Validate token
//! let claims = auth.validate_token(&result.access_token).unwrap();
//! assert_eq!(claims.role, Role::User);
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;
pub mod role;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use jsonwebtoken::Algorithm;
pub use jwt::Claims;
pub use jwt::JwtCodec;
pub use jwt::TokenError;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use role::Role;
pub use role::RoleParseError;
