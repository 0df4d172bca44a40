//! API Server Entry Point
//!
//! Uses `anyhow` for startup errors; request-level errors go through
//! `kernel::error::AppError`.

use std::time::Duration;

use anyhow::Context;
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api::{AppConfig, build_router, cors_layer};
use auth::{AuditLogger, AuthConfig, GoTrueSessionStore, PgAuditSink, auth_router};
use board::{PgBoardRepository, board_router};
use donation::{DonationConfig, PgDonationRepository, donation_router};
use platform::provider::{ProviderClient, ProviderConfig};

const AUDIT_DRAIN_TIMEOUT: Duration = Duration::from_secs(5);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "api=info,auth=info,board=info,donation=info,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;

    // Database connection
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await
        .context("failed to connect to database")?;

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    // Hosted auth provider
    let mut provider_config = ProviderConfig::new(&config.supabase_url, &config.supabase_anon_key);
    if let Some(timeout) = config.provider_timeout {
        provider_config = provider_config.with_timeout(timeout);
    }
    let provider = ProviderClient::new(&provider_config)?;

    // Auth configuration
    let mut auth_config = if cfg!(debug_assertions) {
        AuthConfig::development()
    } else {
        AuthConfig::default()
    };
    if let Some(secure) = config.cookie_secure {
        auth_config.cookie_secure = secure;
    }
    if let Some(capacity) = config.audit_queue_capacity {
        auth_config.audit_queue_capacity = capacity;
    }

    let (audit, audit_worker) =
        AuditLogger::spawn(PgAuditSink::new(pool.clone()), auth_config.audit_queue_capacity);

    let donation_config = config
        .donation_campaign_tag
        .clone()
        .map(DonationConfig::new)
        .unwrap_or_default();
    tracing::info!(campaign = %donation_config.campaign_tag, "Donation campaign configured");

    // Build router
    let app = build_router(
        auth_router(GoTrueSessionStore::new(provider), audit, auth_config),
        board_router(PgBoardRepository::new(pool.clone())),
        donation_router(PgDonationRepository::new(pool.clone()), donation_config),
        cors_layer(&config.frontend_origins),
    );

    // Start server
    tracing::info!("Listening on {}", config.bind_addr);

    let listener = TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // The router owned the last audit senders; the worker ends once drained
    match tokio::time::timeout(AUDIT_DRAIN_TIMEOUT, audit_worker).await {
        Ok(Ok(())) => tracing::info!("Audit queue drained"),
        Ok(Err(e)) => tracing::error!(error = %e, "Audit worker failed"),
        Err(_) => tracing::warn!("Audit queue not drained before shutdown"),
    }

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install signal handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Signal received, starting graceful shutdown");
}
