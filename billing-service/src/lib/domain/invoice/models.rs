use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::Deserialize;
use serde::Serialize;

use crate::domain::client::models::ClientId;
use crate::domain::invoice::errors::InvoiceAmountError;
use crate::domain::invoice::errors::InvoiceNumberError;
use crate::domain::invoice::errors::InvoiceStatusParseError;

/// Invoice issued to a client.
#[derive(Debug, Clone)]
pub struct Invoice {
    pub id: InvoiceId,
    pub number: InvoiceNumber,
    pub amount: InvoiceAmount,
    pub issued_on: NaiveDate,
    pub status: InvoiceStatus,
    pub client_id: ClientId,
}

/// Invoice unique identifier, assigned by storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InvoiceId(pub i64);

impl fmt::Display for InvoiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Invoice reference number, 1-50 characters, unique across invoices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceNumber(String);

impl InvoiceNumber {
    const MAX_LENGTH: usize = 50;

    pub fn new(number: String) -> Result<Self, InvoiceNumberError> {
        if number.is_empty() {
            return Err(InvoiceNumberError::Empty);
        }
        if number.len() > Self::MAX_LENGTH {
            return Err(InvoiceNumberError::TooLong {
                max: Self::MAX_LENGTH,
                actual: number.len(),
            });
        }
        Ok(Self(number))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvoiceNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Strictly positive invoice amount.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InvoiceAmount(f64);

impl InvoiceAmount {
    pub fn new(amount: f64) -> Result<Self, InvoiceAmountError> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(InvoiceAmountError::NotPositive(amount));
        }
        Ok(Self(amount))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

/// Payment state of an invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Paid,
    Unpaid,
}

impl InvoiceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Paid => "paid",
            InvoiceStatus::Unpaid => "unpaid",
        }
    }
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InvoiceStatus {
    type Err = InvoiceStatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "paid" => Ok(InvoiceStatus::Paid),
            "unpaid" => Ok(InvoiceStatus::Unpaid),
            other => Err(InvoiceStatusParseError::Unknown(other.to_string())),
        }
    }
}

/// Command to issue an invoice to a client; the client is named in the URL.
#[derive(Debug)]
pub struct CreateInvoiceCommand {
    pub number: InvoiceNumber,
    pub amount: InvoiceAmount,
    pub issued_on: NaiveDate,
    pub status: InvoiceStatus,
}

/// Invoice record ready for insertion; storage assigns the id.
#[derive(Debug, Clone)]
pub struct NewInvoice {
    pub number: InvoiceNumber,
    pub amount: InvoiceAmount,
    pub issued_on: NaiveDate,
    pub status: InvoiceStatus,
    pub client_id: ClientId,
}
