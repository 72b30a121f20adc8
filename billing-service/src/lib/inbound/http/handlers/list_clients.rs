use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;

use super::create_client::ClientResponseData;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::client::models::Page;
use crate::inbound::http::router::AppState;

pub async fn list_clients(
    State(state): State<AppState>,
    Query(query): Query<ListClientsQuery>,
) -> Result<ApiSuccess<Vec<ClientResponseData>>, ApiError> {
    let page = Page {
        skip: query.skip,
        limit: query.limit,
    };

    state
        .clients
        .list_clients(page)
        .await
        .map_err(ApiError::from)
        .map(|clients| {
            ApiSuccess::new(
                StatusCode::OK,
                clients.iter().map(ClientResponseData::from).collect(),
            )
        })
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ListClientsQuery {
    #[serde(default)]
    skip: i64,
    #[serde(default = "default_limit")]
    limit: i64,
}

fn default_limit() -> i64 {
    100
}
