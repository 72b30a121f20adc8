use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::Deserialize;
use serde::Serialize;

use crate::domain::client::models::ClientId;
use crate::domain::complaint::errors::ComplaintStatusParseError;
use crate::domain::complaint::errors::DescriptionError;
use crate::domain::complaint::errors::SubjectError;

/// Complaint filed by a client.
#[derive(Debug, Clone)]
pub struct Complaint {
    pub id: ComplaintId,
    pub subject: Subject,
    pub description: Description,
    pub opened_on: NaiveDate,
    pub status: ComplaintStatus,
    pub client_id: ClientId,
}

/// Complaint unique identifier, assigned by storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ComplaintId(pub i64);

impl fmt::Display for ComplaintId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Complaint subject line, 1-100 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subject(String);

impl Subject {
    const MAX_LENGTH: usize = 100;

    pub fn new(subject: String) -> Result<Self, SubjectError> {
        if subject.is_empty() {
            return Err(SubjectError::Empty);
        }
        if subject.len() > Self::MAX_LENGTH {
            return Err(SubjectError::TooLong {
                max: Self::MAX_LENGTH,
                actual: subject.len(),
            });
        }
        Ok(Self(subject))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Complaint body, 1-500 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Description(String);

impl Description {
    const MAX_LENGTH: usize = 500;

    pub fn new(description: String) -> Result<Self, DescriptionError> {
        if description.is_empty() {
            return Err(DescriptionError::Empty);
        }
        if description.len() > Self::MAX_LENGTH {
            return Err(DescriptionError::TooLong {
                max: Self::MAX_LENGTH,
                actual: description.len(),
            });
        }
        Ok(Self(description))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Handling state of a complaint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplaintStatus {
    Open,
    InProgress,
    Resolved,
}

impl ComplaintStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComplaintStatus::Open => "open",
            ComplaintStatus::InProgress => "in_progress",
            ComplaintStatus::Resolved => "resolved",
        }
    }
}

impl fmt::Display for ComplaintStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComplaintStatus {
    type Err = ComplaintStatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "open" => Ok(ComplaintStatus::Open),
            "in_progress" => Ok(ComplaintStatus::InProgress),
            "resolved" => Ok(ComplaintStatus::Resolved),
            other => Err(ComplaintStatusParseError::Unknown(other.to_string())),
        }
    }
}

/// Command to file a complaint; the client is named in the URL.
#[derive(Debug)]
pub struct CreateComplaintCommand {
    pub subject: Subject,
    pub description: Description,
    pub opened_on: NaiveDate,
    pub status: ComplaintStatus,
}

/// Complaint record ready for insertion; storage assigns the id.
#[derive(Debug, Clone)]
pub struct NewComplaint {
    pub subject: Subject,
    pub description: Description,
    pub opened_on: NaiveDate,
    pub status: ComplaintStatus,
    pub client_id: ClientId,
}
