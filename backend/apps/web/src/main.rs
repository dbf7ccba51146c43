//! Web Server Entry Point
//!
//! Uses `anyhow` for startup errors; request-level errors go through the
//! crates' own error types.

mod config;
mod routes;

use std::net::SocketAddr;

use anyhow::Context;
use auth::{AuthAppState, PgAuthRepository};
use clients::{ClientsAppState, PgClientRepository};
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::WebConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "web=info,auth=info,clients=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = WebConfig::from_env().context("invalid configuration")?;

    let pool = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .connect(&config.database_url)
        .await
        .context("failed to connect to database")?;

    tracing::info!("Connected to database");

    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await
        .context("failed to run migrations")?;

    tracing::info!("Migrations completed");

    let auth_repo = PgAuthRepository::new(pool.clone());

    // Startup cleanup must not block serving
    if let Err(e) = auth_repo.cleanup_expired().await {
        tracing::warn!(error = %e, "Auth session cleanup failed, continuing anyway");
    }

    tracing::info!(
        allowed_email_domain = %config.auth.allowed_email_domain,
        bootstrap_registration = config.auth.allow_bootstrap_registration,
        cookie_secure = config.auth.cookie_secure,
        "Auth configured"
    );

    let app = routes::build_router(
        AuthAppState::new(auth_repo, config.auth),
        ClientsAppState::new(PgClientRepository::new(pool)),
    );

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
