use std::time::Duration;

use anyhow::Context;
use roomboard_api::config::ServerConfig;
use roomboard_api::router::build_app;
use roomboard_api::server;
use roomboard_api::state::AppState;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "roomboard_api=debug,roomboard_db=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env().context("Invalid server configuration")?;
    tracing::info!(?config, "Configuration loaded");

    let pool = roomboard_db::create_pool(&config.db)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Database connection pool created");

    roomboard_db::health_check(&pool)
        .await
        .context("Database health check failed")?;
    tracing::info!("Database health check passed");

    roomboard_db::run_migrations(&pool)
        .await
        .context("Failed to run database migrations")?;
    tracing::info!("Database migrations applied");

    let app = build_app(AppState::new(pool.clone()), &config);

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {addr}"))?;
    tracing::info!("Listening on {addr}");

    server::serve(
        listener,
        app,
        Duration::from_secs(config.shutdown_timeout_secs),
    )
    .await
    .context("Server error")?;

    pool.close().await;
    tracing::info!("Server shut down");

    Ok(())
}
