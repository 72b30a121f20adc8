use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::NaiveDate;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::client::models::ClientId;
use crate::domain::complaint::errors::DescriptionError;
use crate::domain::complaint::errors::SubjectError;
use crate::domain::complaint::models::Complaint;
use crate::domain::complaint::models::ComplaintStatus;
use crate::domain::complaint::models::CreateComplaintCommand;
use crate::domain::complaint::models::Description;
use crate::domain::complaint::models::Subject;
use crate::inbound::http::router::AppState;

pub async fn create_complaint(
    State(state): State<AppState>,
    Path(client_id): Path<i64>,
    Json(body): Json<CreateComplaintRequestBody>,
) -> Result<ApiSuccess<ComplaintResponseData>, ApiError> {
    state
        .complaints
        .create_complaint(ClientId(client_id), body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref complaint| ApiSuccess::new(StatusCode::CREATED, complaint.into()))
}

/// HTTP request body for filing a complaint (raw JSON).
/// The owning client is named in the URL, not the body.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateComplaintRequestBody {
    subject: String,
    description: String,
    opened_on: NaiveDate,
    #[serde(default)]
    status: Option<ComplaintStatus>,
}

#[derive(Debug, Clone, Error)]
enum ParseCreateComplaintRequestError {
    #[error("Invalid complaint subject: {0}")]
    Subject(#[from] SubjectError),

    #[error("Invalid complaint description: {0}")]
    Description(#[from] DescriptionError),
}

impl CreateComplaintRequestBody {
    fn try_into_command(self) -> Result<CreateComplaintCommand, ParseCreateComplaintRequestError> {
        let subject = Subject::new(self.subject)?;
        let description = Description::new(self.description)?;
        let status = self.status.unwrap_or(ComplaintStatus::Open);
        Ok(CreateComplaintCommand {
            subject,
            description,
            opened_on: self.opened_on,
            status,
        })
    }
}

impl From<ParseCreateComplaintRequestError> for ApiError {
    fn from(err: ParseCreateComplaintRequestError) -> Self {
        ApiError::UnprocessableEntity(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComplaintResponseData {
    pub id: i64,
    pub subject: String,
    pub description: String,
    pub opened_on: NaiveDate,
    pub status: ComplaintStatus,
    pub client_id: i64,
}

impl From<&Complaint> for ComplaintResponseData {
    fn from(complaint: &Complaint) -> Self {
        Self {
            id: complaint.id.0,
            subject: complaint.subject.as_str().to_string(),
            description: complaint.description.as_str().to_string(),
            opened_on: complaint.opened_on,
            status: complaint.status,
            client_id: complaint.client_id.0,
        }
    }
}
