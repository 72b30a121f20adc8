use std::fmt;

use crate::domain::client::errors::ClientNameError;
use crate::domain::client::errors::PhoneNumberError;
use crate::domain::user::models::EmailAddress;

/// Customer record owning invoices and complaints.
///
/// Deleting a client cascades to everything it owns.
#[derive(Debug, Clone)]
pub struct Client {
    pub id: ClientId,
    pub name: ClientName,
    pub email: EmailAddress,
    pub phone: Option<PhoneNumber>,
}

/// Client unique identifier, assigned by storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClientId(pub i64);

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Client display name, 2-100 characters, unique across clients.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientName(String);

impl ClientName {
    const MIN_LENGTH: usize = 2;
    const MAX_LENGTH: usize = 100;

    pub fn new(name: String) -> Result<Self, ClientNameError> {
        let length = name.len();
        if length < Self::MIN_LENGTH {
            return Err(ClientNameError::TooShort {
                min: Self::MIN_LENGTH,
                actual: length,
            });
        }
        if length > Self::MAX_LENGTH {
            return Err(ClientNameError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            });
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClientName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Optional contact number, at most 20 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    const MAX_LENGTH: usize = 20;

    pub fn new(phone: String) -> Result<Self, PhoneNumberError> {
        let length = phone.len();
        if length > Self::MAX_LENGTH {
            return Err(PhoneNumberError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            });
        }
        Ok(Self(phone))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Command to create a client with validated fields.
#[derive(Debug)]
pub struct CreateClientCommand {
    pub name: ClientName,
    pub email: EmailAddress,
    pub phone: Option<PhoneNumber>,
}

/// Client record ready for insertion; storage assigns the id.
#[derive(Debug, Clone)]
pub struct NewClient {
    pub name: ClientName,
    pub email: EmailAddress,
    pub phone: Option<PhoneNumber>,
}

/// Offset pagination for client listings.
#[derive(Debug, Clone, Copy)]
pub struct Page {
    pub skip: i64,
    pub limit: i64,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: 100,
        }
    }
}
