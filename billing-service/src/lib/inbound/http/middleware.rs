use axum::extract::Request;
use axum::extract::State;
use axum::http::header;
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;

use crate::domain::user::errors::UserError;
use crate::domain::user::models::User;
use crate::domain::user::models::Username;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// Extension type carrying the authenticated account through a request.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

/// Extension type set by the optional authentication layer. `None` means
/// the request proceeds anonymously.
#[derive(Debug, Clone)]
pub struct MaybeUser(pub Option<User>);

/// Outcome of the identity resolution pipeline.
///
/// Everything short of a disabled account collapses into `Unauthenticated`:
/// a missing header, a garbage or expired token, and a token whose subject
/// no longer exists must be indistinguishable to the caller, so account
/// existence never leaks. A disabled account is distinct because the caller
/// has already proven knowledge of valid credentials.
enum IdentifyError {
    Unauthenticated,
    AccountDisabled,
    Internal(UserError),
}

/// Resolve the caller's identity from the request headers.
///
/// Single pipeline shared by the mandatory and optional layers:
/// bearer token -> signature/expiry validation -> account lookup by the
/// token subject -> active check. One pass, no retries.
async fn identify(state: &AppState, headers: &HeaderMap) -> Result<User, IdentifyError> {
    let token = bearer_token(headers).ok_or(IdentifyError::Unauthenticated)?;

    let claims = state.authenticator.validate_token(token).map_err(|e| {
        tracing::warn!(error = %e, "Token validation failed");
        IdentifyError::Unauthenticated
    })?;

    let username =
        Username::new(claims.sub).map_err(|_| IdentifyError::Unauthenticated)?;

    let user = state
        .users
        .get_user_by_username(&username)
        .await
        .map_err(|e| match e {
            UserError::NotFoundByUsername(_) => IdentifyError::Unauthenticated,
            other => IdentifyError::Internal(other),
        })?;

    if !user.is_active {
        return Err(IdentifyError::AccountDisabled);
    }

    Ok(user)
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

/// Mandatory authentication layer.
///
/// Inserts `CurrentUser` into request extensions on success; rejects with
/// 401 (plus the `WWW-Authenticate: Bearer` hint) or 403 otherwise.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    match identify(&state, req.headers()).await {
        Ok(user) => {
            req.extensions_mut().insert(CurrentUser(user));
            Ok(next.run(req).await)
        }
        Err(IdentifyError::Unauthenticated) => Err(ApiError::Unauthorized(
            "Could not validate credentials".to_string(),
        )),
        Err(IdentifyError::AccountDisabled) => {
            Err(ApiError::Forbidden("Account disabled".to_string()))
        }
        Err(IdentifyError::Internal(e)) => Err(ApiError::from(e)),
    }
}

/// Optional authentication layer.
///
/// Same pipeline as [`authenticate`], but every failure degrades to an
/// anonymous request instead of a rejection.
pub async fn authenticate_optional(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Response {
    let user = identify(&state, req.headers()).await.ok();
    req.extensions_mut().insert(MaybeUser(user));
    next.run(req).await
}

/// Administrator gate, layered inside [`authenticate`].
///
/// The caller is already authenticated here, so a role mismatch is a 403,
/// never a 401.
pub async fn require_admin(req: Request, next: Next) -> Result<Response, ApiError> {
    let current_user = req.extensions().get::<CurrentUser>().ok_or_else(|| {
        ApiError::InternalServerError("Admin gate reached without authentication".to_string())
    })?;

    if current_user.0.role != auth::Role::Admin {
        return Err(ApiError::Forbidden(
            "Administrator access required".to_string(),
        ));
    }

    Ok(next.run(req).await)
}
