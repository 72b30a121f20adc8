use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::create_invoice::InvoiceResponseData;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::client::models::ClientId;
use crate::inbound::http::router::AppState;

pub async fn list_client_invoices(
    State(state): State<AppState>,
    Path(client_id): Path<i64>,
) -> Result<ApiSuccess<Vec<InvoiceResponseData>>, ApiError> {
    state
        .invoices
        .list_for_client(ClientId(client_id))
        .await
        .map_err(ApiError::from)
        .map(|invoices| {
            ApiSuccess::new(
                StatusCode::OK,
                invoices.iter().map(InvoiceResponseData::from).collect(),
            )
        })
}
