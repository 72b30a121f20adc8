use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::client::errors::ClientNameError;
use crate::domain::client::errors::PhoneNumberError;
use crate::domain::client::models::Client;
use crate::domain::client::models::ClientName;
use crate::domain::client::models::CreateClientCommand;
use crate::domain::client::models::PhoneNumber;
use crate::domain::user::errors::EmailError;
use crate::domain::user::models::EmailAddress;
use crate::inbound::http::router::AppState;

pub async fn create_client(
    State(state): State<AppState>,
    Json(body): Json<CreateClientRequestBody>,
) -> Result<ApiSuccess<ClientResponseData>, ApiError> {
    state
        .clients
        .create_client(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref client| ApiSuccess::new(StatusCode::CREATED, client.into()))
}

/// HTTP request body for creating a client (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateClientRequestBody {
    name: String,
    email: String,
    #[serde(default)]
    phone: Option<String>,
}

#[derive(Debug, Clone, Error)]
enum ParseCreateClientRequestError {
    #[error("Invalid client name: {0}")]
    Name(#[from] ClientNameError),

    #[error("Invalid email: {0}")]
    Email(#[from] EmailError),

    #[error("Invalid phone number: {0}")]
    Phone(#[from] PhoneNumberError),
}

impl CreateClientRequestBody {
    fn try_into_command(self) -> Result<CreateClientCommand, ParseCreateClientRequestError> {
        let name = ClientName::new(self.name)?;
        let email = EmailAddress::new(self.email)?;
        let phone = self.phone.map(PhoneNumber::new).transpose()?;
        Ok(CreateClientCommand { name, email, phone })
    }
}

impl From<ParseCreateClientRequestError> for ApiError {
    fn from(err: ParseCreateClientRequestError) -> Self {
        ApiError::UnprocessableEntity(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClientResponseData {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
}

impl From<&Client> for ClientResponseData {
    fn from(client: &Client) -> Self {
        Self {
            id: client.id.0,
            name: client.name.as_str().to_string(),
            email: client.email.as_str().to_string(),
            phone: client.phone.as_ref().map(|p| p.as_str().to_string()),
        }
    }
}
