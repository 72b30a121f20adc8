use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::create_invoice::InvoiceResponseData;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::invoice::models::InvoiceId;
use crate::domain::invoice::models::InvoiceStatus;
use crate::inbound::http::router::AppState;

/// Update the payment status of an invoice; the status is the only
/// mutable field.
pub async fn update_invoice_status(
    State(state): State<AppState>,
    Path(invoice_id): Path<i64>,
    Json(body): Json<UpdateInvoiceStatusRequestBody>,
) -> Result<ApiSuccess<InvoiceResponseData>, ApiError> {
    state
        .invoices
        .update_status(InvoiceId(invoice_id), body.status)
        .await
        .map_err(ApiError::from)
        .map(|ref invoice| ApiSuccess::new(StatusCode::OK, invoice.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdateInvoiceStatusRequestBody {
    status: InvoiceStatus,
}
