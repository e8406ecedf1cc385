use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hamo_api::config::ServerConfig;
use hamo_api::router::build_app_router;
use hamo_api::secrets;
use hamo_api::state::AppState;
use hamo_db::MySqlStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hamo_api=debug,hamo_db=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let mut config = ServerConfig::from_env().context("Invalid configuration")?;
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    if let Some(source) = config.secrets.clone() {
        match secrets::fetch_db_credentials(&source).await {
            Ok(creds) => {
                creds.apply(&mut config.db);
                tracing::info!(
                    secret = %source.secret_name,
                    "Database credentials loaded from Secrets Manager"
                );
            }
            Err(err) => {
                tracing::warn!(
                    error = %err,
                    "Secrets Manager lookup failed, using environment credentials"
                );
            }
        }
    }

    // --- Database ---
    let pool = hamo_db::create_pool(&config.db)
        .await
        .with_context(|| {
            format!(
                "Failed to connect to database at {}:{}",
                config.db.host, config.db.port
            )
        })?;
    tracing::info!(db = ?config.db, "Database connection pool created");

    if !config.db.skip_check {
        hamo_db::health_check(&pool)
            .await
            .context("Database health check failed")?;
        tracing::info!("Database health check passed");
    }

    // --- App state ---
    let state = AppState::new(Arc::new(MySqlStore::new(pool.clone())));

    // --- Router ---
    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config
            .host
            .parse::<IpAddr>()
            .context("Invalid HOST address")?,
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {addr}"))?;

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
    .context("Server error")?;

    // --- Post-shutdown cleanup ---
    tracing::info!("Server stopped accepting connections, closing database pool");
    pool.close().await;
    tracing::info!("Graceful shutdown complete");

    Ok(())
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix) so the server
/// shuts down cleanly whether stopped interactively or by a process
/// manager.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "Failed to install Ctrl-C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
