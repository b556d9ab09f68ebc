//! HTTP server binary for the task API.
//!
//! Bootstraps configuration, the `PostgreSQL` connection pool, and the
//! axum router, then serves until SIGINT or SIGTERM. The store is
//! probed once before the listener opens; a dead store at startup is
//! fatal, so the process never accepts requests it cannot serve.

use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use mockable::DefaultClock;
use std::net::SocketAddr;
use std::sync::Arc;
use tareas::config::ServerConfig;
use tareas::http;
use tareas::task::adapters::postgres::PostgresTaskRepository;
use tareas::task::ports::TaskRepository;
use tareas::task::services::TaskRecordService;
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tareas=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(error) => {
            tracing::error!(%error, "configuration error");
            std::process::exit(1);
        }
    };

    let manager = ConnectionManager::<PgConnection>::new(&config.database_url);
    let pool = match Pool::builder().build(manager) {
        Ok(pool) => pool,
        Err(error) => {
            tracing::error!(%error, "failed to build connection pool");
            std::process::exit(1);
        }
    };

    let repository = Arc::new(PostgresTaskRepository::new(pool, config.store_timeout));

    // Refuse to serve with a dead store behind us.
    if let Err(error) = repository.ping().await {
        tracing::error!(%error, "store unreachable at startup");
        std::process::exit(1);
    }
    tracing::info!("store connection verified");

    let service = Arc::new(TaskRecordService::new(repository, Arc::new(DefaultClock)));
    let app = http::router(service, http::cors_layer(&config.allowed_origins));

    let address = SocketAddr::new(config.bind_addr, config.port);
    let listener = match tokio::net::TcpListener::bind(address).await {
        Ok(listener) => listener,
        Err(error) => {
            tracing::error!(%error, %address, "failed to bind listener");
            std::process::exit(1);
        }
    };
    tracing::info!(%address, "server listening");

    if let Err(error) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!(%error, "server error");
        std::process::exit(1);
    }

    tracing::info!("server shutdown complete");
}

/// Completes when a shutdown signal (SIGINT or SIGTERM) is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            tracing::warn!(%error, "failed to install Ctrl+C handler");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(error) => {
                tracing::warn!(%error, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("received Ctrl+C, shutting down");
        }
        () = terminate => {
            tracing::info!("received SIGTERM, shutting down");
        }
    }
}
