use std::sync::Arc;

use auth::PasswordHasher;
use auth::TokenCodec;
use chrono::Duration;
use harmony_server::config::resolve_jwt_secret;
use harmony_server::config::Config;
use harmony_server::domain::auth::service::AuthService;
use harmony_server::domain::channel::service::ChannelService;
use harmony_server::domain::user::service::UserService;
use harmony_server::inbound::http::router::create_router;
use harmony_server::inbound::http::router::AppState;
use harmony_server::outbound::repositories::connect;
use harmony_server::outbound::repositories::SqliteChannelRepository;
use harmony_server::outbound::repositories::SqliteUserRepository;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "harmony_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "harmony-server",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        database_url = %config.database.url,
        host = %config.server.host,
        http_port = config.server.http_port,
        access_ttl_minutes = config.jwt.access_ttl_minutes,
        refresh_ttl_hours = config.jwt.refresh_ttl_hours,
        "Configuration loaded"
    );

    let pool = connect(&config.database.url, config.database.max_connections).await?;

    let jwt_secret = resolve_jwt_secret(&config.jwt)?;
    let token_codec = Arc::new(TokenCodec::new(
        jwt_secret.expose_secret().as_bytes(),
        Duration::minutes(config.jwt.access_ttl_minutes),
        Duration::hours(config.jwt.refresh_ttl_hours),
    ));
    let password_hasher = Arc::new(PasswordHasher::with_params(
        config.password.memory_cost_kib,
        config.password.time_cost,
        config.password.parallelism,
    )?);

    let user_repository = Arc::new(SqliteUserRepository::new(pool.clone()));
    let channel_repository = Arc::new(SqliteChannelRepository::new(pool));

    let state = AppState {
        auth_service: Arc::new(AuthService::new(
            Arc::clone(&user_repository),
            password_hasher,
            Arc::clone(&token_codec),
        )),
        user_service: Arc::new(UserService::new(user_repository)),
        channel_service: Arc::new(ChannelService::new(channel_repository)),
        tokens: token_codec,
    };

    let http_address = format!("{}:{}", config.server.host, config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    axum::serve(http_listener, create_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server exited successfully");

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown signal received"),
        Err(e) => {
            tracing::error!(error = %e, "Failed to listen for shutdown signal");
            std::future::pending::<()>().await;
        }
    }
}
