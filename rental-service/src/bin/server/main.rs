use std::sync::Arc;

use auth::Authenticator;
use chrono::Duration;
use rental_service::config::Config;
use rental_service::domain::auth::service::AuthService;
use rental_service::domain::user::service::UserService;
use rental_service::inbound::http::router::create_router;
use rental_service::messages;
use rental_service::outbound::repositories::PostgresUserRepository;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rental_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        message_id = messages::INFO_STARTING_SERVER.code,
        service = "rental-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    if let Err(e) = run().await {
        tracing::error!(
            message_id = messages::ERR_SERVER_STARTUP.code,
            error = %e,
            "Service stopped"
        );
        return Err(e);
    }

    Ok(())
}

async fn run() -> Result<(), anyhow::Error> {
    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        max_connections = config.database.max_connections,
        access_token_ttl_secs = config.jwt.access_token_ttl_secs,
        refresh_token_ttl_secs = config.jwt.refresh_token_ttl_secs,
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = config.database.max_connections,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let authenticator = Arc::new(
        Authenticator::new(config.jwt.secret.as_bytes()).with_token_ttls(
            Duration::seconds(config.jwt.access_token_ttl_secs),
            Duration::seconds(config.jwt.refresh_token_ttl_secs),
        ),
    );
    let user_repository = Arc::new(PostgresUserRepository::new(pg_pool));

    let auth_service = Arc::new(AuthService::new(
        Arc::clone(&user_repository),
        Arc::clone(&authenticator),
    ));
    let user_service = Arc::new(UserService::new(user_repository));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;

    let http_application = create_router(auth_service, user_service, authenticator);

    tracing::info!(
        message_id = messages::INFO_SERVER_UP.code,
        address = %http_address,
        protocol = "http",
        "Http server listening"
    );

    axum::serve(http_listener, http_application)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server exited successfully");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
    tracing::info!("Shutdown signal received");
}
