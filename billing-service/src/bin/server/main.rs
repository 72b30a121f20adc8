use std::sync::Arc;

use auth::Authenticator;
use billing_service::config::Config;
use billing_service::domain::client::service::ClientService;
use billing_service::domain::complaint::service::ComplaintService;
use billing_service::domain::invoice::service::InvoiceService;
use billing_service::domain::user::service::UserService;
use billing_service::inbound::http::router::create_router;
use billing_service::inbound::http::router::AppState;
use billing_service::outbound::repositories::PostgresClientRepository;
use billing_service::outbound::repositories::PostgresComplaintRepository;
use billing_service::outbound::repositories::PostgresInvoiceRepository;
use billing_service::outbound::repositories::PostgresUserRepository;
use chrono::Duration;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "billing_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "billing-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        jwt_algorithm = %config.jwt.algorithm,
        jwt_expiration_minutes = config.jwt.expiration_minutes,
        "Configuration loaded"
    );

    let algorithm: auth::Algorithm = config
        .jwt
        .algorithm
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid jwt.algorithm {:?}: {}", config.jwt.algorithm, e))?;

    let pg_pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = 5,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let authenticator = Arc::new(Authenticator::new(
        config.jwt.secret.as_bytes(),
        algorithm,
        Duration::minutes(config.jwt.expiration_minutes),
    ));

    let user_repository = Arc::new(PostgresUserRepository::new(pg_pool.clone()));
    let client_repository = Arc::new(PostgresClientRepository::new(pg_pool.clone()));
    let invoice_repository = Arc::new(PostgresInvoiceRepository::new(pg_pool.clone()));
    let complaint_repository = Arc::new(PostgresComplaintRepository::new(pg_pool));

    let state = AppState {
        users: Arc::new(UserService::new(user_repository)),
        clients: Arc::new(ClientService::new(Arc::clone(&client_repository))),
        invoices: Arc::new(InvoiceService::new(
            invoice_repository,
            Arc::clone(&client_repository),
        )),
        complaints: Arc::new(ComplaintService::new(
            complaint_repository,
            client_repository,
        )),
        authenticator,
    };

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    axum::serve(http_listener, create_router(state)).await?;

    Ok(())
}
