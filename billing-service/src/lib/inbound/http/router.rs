use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::delete;
use axum::routing::get;
use axum::routing::patch;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::create_client::create_client;
use super::handlers::create_complaint::create_complaint;
use super::handlers::create_invoice::create_invoice;
use super::handlers::delete_client::delete_client;
use super::handlers::get_client::get_client;
use super::handlers::list_client_complaints::list_client_complaints;
use super::handlers::list_client_invoices::list_client_invoices;
use super::handlers::list_clients::list_clients;
use super::handlers::login::login;
use super::handlers::me::me;
use super::handlers::register::register;
use super::handlers::root::root;
use super::handlers::update_complaint_status::update_complaint_status;
use super::handlers::update_invoice_status::update_invoice_status;
use super::middleware::authenticate;
use super::middleware::authenticate_optional;
use super::middleware::require_admin;
use crate::domain::client::ports::ClientServicePort;
use crate::domain::complaint::ports::ComplaintServicePort;
use crate::domain::invoice::ports::InvoiceServicePort;
use crate::domain::user::ports::UserServicePort;

#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserServicePort>,
    pub clients: Arc<dyn ClientServicePort>,
    pub invoices: Arc<dyn InvoiceServicePort>,
    pub complaints: Arc<dyn ComplaintServicePort>,
    pub authenticator: Arc<Authenticator>,
}

pub fn create_router(state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/", get(root))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            authenticate_optional,
        ))
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login));

    let protected_routes = Router::new()
        .route("/api/auth/me", get(me))
        .route("/api/clients", post(create_client).get(list_clients))
        .route("/api/clients/:client_id", get(get_client))
        .route(
            "/api/clients/:client_id/invoices",
            post(create_invoice).get(list_client_invoices),
        )
        .route(
            "/api/clients/:client_id/complaints",
            post(create_complaint).get(list_client_complaints),
        )
        .route("/api/invoices/:invoice_id", patch(update_invoice_status))
        .route(
            "/api/complaints/:complaint_id",
            patch(update_complaint_status),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            authenticate,
        ));

    // Admin-only surface: authentication runs first, then the role gate.
    let admin_routes = Router::new()
        .route("/api/clients/:client_id", delete(delete_client))
        .route_layer(middleware::from_fn(require_admin))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            authenticate,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .merge(admin_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
