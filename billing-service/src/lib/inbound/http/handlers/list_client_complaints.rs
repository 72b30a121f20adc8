use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::create_complaint::ComplaintResponseData;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::client::models::ClientId;
use crate::inbound::http::router::AppState;

pub async fn list_client_complaints(
    State(state): State<AppState>,
    Path(client_id): Path<i64>,
) -> Result<ApiSuccess<Vec<ComplaintResponseData>>, ApiError> {
    state
        .complaints
        .list_for_client(ClientId(client_id))
        .await
        .map_err(ApiError::from)
        .map(|complaints| {
            ApiSuccess::new(
                StatusCode::OK,
                complaints.iter().map(ComplaintResponseData::from).collect(),
            )
        })
}
