use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::create_client::ClientResponseData;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::client::models::ClientId;
use crate::inbound::http::router::AppState;

pub async fn get_client(
    State(state): State<AppState>,
    Path(client_id): Path<i64>,
) -> Result<ApiSuccess<ClientResponseData>, ApiError> {
    state
        .clients
        .get_client(ClientId(client_id))
        .await
        .map_err(ApiError::from)
        .map(|ref client| ApiSuccess::new(StatusCode::OK, client.into()))
}
