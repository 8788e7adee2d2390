//! 用户 CRUD 服务入口

use std::time::Duration;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::{error, info};

use axum_user_service::{
    build_router,
    config::load_config,
    core::middleware::apply_layers,
    infrastructure::{
        database::{ensure_schema, DatabaseManager},
        logger::Logger,
    },
    AppState, PgUserStore,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = load_config().context("failed to load config")?;
    Logger::init(&config.logging.level);

    info!("Starting user service...");

    let database = DatabaseManager::new(&config.database)
        .await
        .map_err(|e| {
            error!("Failed to initialize database: {}", e);
            e
        })
        .context("failed to connect to database")?;
    ensure_schema(database.get_pool())
        .await
        .context("failed to create users table")?;

    let state = AppState::new(PgUserStore::new(database.into_pool()));

    let app = apply_layers(
        build_router(state),
        Duration::from_secs(config.http.request_timeout_seconds),
    );

    let listener = TcpListener::bind(config.http.socket_address())
        .await
        .with_context(|| format!("failed to bind {}", config.http.socket_address()))?;
    let addr = listener.local_addr()?;

    info!("User service running on http://{}", addr);
    info!("   GET    /users            - List users (supports ?start=0&count=10)");
    info!("   GET    /user/:id         - Get user by ID");
    info!("   POST   /user             - Create user");
    info!("   PUT    /users/:id        - Update user");
    info!("   DELETE /user/:id         - Delete user");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("User service stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
    }
}
