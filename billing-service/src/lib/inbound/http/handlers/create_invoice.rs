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
use crate::domain::invoice::errors::InvoiceAmountError;
use crate::domain::invoice::errors::InvoiceNumberError;
use crate::domain::invoice::models::CreateInvoiceCommand;
use crate::domain::invoice::models::Invoice;
use crate::domain::invoice::models::InvoiceAmount;
use crate::domain::invoice::models::InvoiceNumber;
use crate::domain::invoice::models::InvoiceStatus;
use crate::inbound::http::router::AppState;

pub async fn create_invoice(
    State(state): State<AppState>,
    Path(client_id): Path<i64>,
    Json(body): Json<CreateInvoiceRequestBody>,
) -> Result<ApiSuccess<InvoiceResponseData>, ApiError> {
    state
        .invoices
        .create_invoice(ClientId(client_id), body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref invoice| ApiSuccess::new(StatusCode::CREATED, invoice.into()))
}

/// HTTP request body for issuing an invoice (raw JSON).
/// The owning client is named in the URL, not the body.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreateInvoiceRequestBody {
    number: String,
    amount: f64,
    issued_on: NaiveDate,
    #[serde(default)]
    status: Option<InvoiceStatus>,
}

#[derive(Debug, Clone, Error)]
enum ParseCreateInvoiceRequestError {
    #[error("Invalid invoice number: {0}")]
    Number(#[from] InvoiceNumberError),

    #[error("Invalid invoice amount: {0}")]
    Amount(#[from] InvoiceAmountError),
}

impl CreateInvoiceRequestBody {
    fn try_into_command(self) -> Result<CreateInvoiceCommand, ParseCreateInvoiceRequestError> {
        let number = InvoiceNumber::new(self.number)?;
        let amount = InvoiceAmount::new(self.amount)?;
        let status = self.status.unwrap_or(InvoiceStatus::Unpaid);
        Ok(CreateInvoiceCommand {
            number,
            amount,
            issued_on: self.issued_on,
            status,
        })
    }
}

impl From<ParseCreateInvoiceRequestError> for ApiError {
    fn from(err: ParseCreateInvoiceRequestError) -> Self {
        ApiError::UnprocessableEntity(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvoiceResponseData {
    pub id: i64,
    pub number: String,
    pub amount: f64,
    pub issued_on: NaiveDate,
    pub status: InvoiceStatus,
    pub client_id: i64,
}

impl From<&Invoice> for InvoiceResponseData {
    fn from(invoice: &Invoice) -> Self {
        Self {
            id: invoice.id.0,
            number: invoice.number.as_str().to_string(),
            amount: invoice.amount.value(),
            issued_on: invoice.issued_on,
            status: invoice.status,
            client_id: invoice.client_id.0,
        }
    }
}
