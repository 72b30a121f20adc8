use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::ApiError;
use crate::domain::client::models::ClientId;
use crate::inbound::http::router::AppState;

/// Admin-only: removes the client and, by cascade, its invoices and
/// complaints.
pub async fn delete_client(
    State(state): State<AppState>,
    Path(client_id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state
        .clients
        .delete_client(ClientId(client_id))
        .await
        .map_err(ApiError::from)?;

    Ok(StatusCode::NO_CONTENT)
}
