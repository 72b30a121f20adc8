use axum::http::StatusCode;
use axum::Extension;
use serde::Serialize;

use super::ApiSuccess;
use crate::inbound::http::middleware::MaybeUser;

/// Public service descriptor.
///
/// Runs behind the optional authentication layer: a valid bearer token
/// personalizes the response, anything else degrades to anonymous.
pub async fn root(
    Extension(MaybeUser(user)): Extension<MaybeUser>,
) -> ApiSuccess<RootResponseData> {
    ApiSuccess::new(
        StatusCode::OK,
        RootResponseData {
            service: "billing-service".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            authenticated_as: user.map(|u| u.username.as_str().to_string()),
        },
    )
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RootResponseData {
    pub service: String,
    pub version: String,
    pub authenticated_as: Option<String>,
}
