use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::create_complaint::ComplaintResponseData;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::complaint::models::ComplaintId;
use crate::domain::complaint::models::ComplaintStatus;
use crate::inbound::http::router::AppState;

/// Update the handling status of a complaint; the status is the only
/// mutable field.
pub async fn update_complaint_status(
    State(state): State<AppState>,
    Path(complaint_id): Path<i64>,
    Json(body): Json<UpdateComplaintStatusRequestBody>,
) -> Result<ApiSuccess<ComplaintResponseData>, ApiError> {
    state
        .complaints
        .update_status(ComplaintId(complaint_id), body.status)
        .await
        .map_err(ApiError::from)
        .map(|ref complaint| ApiSuccess::new(StatusCode::OK, complaint.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdateComplaintStatusRequestBody {
    status: ComplaintStatus,
}
