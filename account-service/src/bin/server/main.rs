use std::sync::Arc;

use account_service::config::Config;
use account_service::domain::authentication::models::token_profile;
use account_service::domain::authentication::service::AuthService;
use account_service::domain::user::service::UserService;
use account_service::inbound::http::router::create_router;
use account_service::outbound::repositories::PostgresUserRepository;
use auth::Authenticator;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "account_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "account-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    // Reject a malformed lifetime before accepting any login
    let token_lifetime = auth::token_lifetime(config.jwt.duration.as_deref())?;

    if config.jwt.secret.is_empty() {
        tracing::warn!("jwt.secret is empty; logins will fail to sign tokens");
    }

    tracing::info!(
        http_port = config.server.http_port,
        max_connections = config.database.max_connections,
        token_lifetime_secs = token_lifetime.num_seconds(),
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

    let authenticator = Arc::new(Authenticator::new(
        config.jwt.secret.as_bytes(),
        token_profile(),
    ));
    let user_repository = Arc::new(PostgresUserRepository::new(pg_pool));

    let user_service = Arc::new(UserService::new(Arc::clone(&user_repository)));
    let auth_service = Arc::new(AuthService::new(
        user_repository,
        Arc::clone(&authenticator),
        config.jwt.duration.clone(),
    ));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(user_service, auth_service, authenticator);

    if let Err(e) = axum::serve(http_listener, http_application).await {
        tracing::error!(error = %e, "Server error");
        return Err(e.into());
    }

    tracing::info!("Server exited successfully");
    Ok(())
}
