//!
//! HTTP service exposing the activation flag of the main service record.
//! Reads configuration from environment variables (optionally via .env).

use std::sync::Arc;

use tracing::{error, info};

use service_switch::api::{create_api_router, ApiState};
use service_switch::config::AppConfig;
use service_switch::infrastructure::database::repositories::SeaOrmServiceRecordRepository;
use service_switch::shared::shutdown::{listen_for_shutdown_signals, ShutdownSignal};
use service_switch::{init_database, DatabaseConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // ── Load configuration ─────────────────────────────────────
    let config = match AppConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            return Err(e.into());
        }
    };
    info!("Configuration loaded; API key is set");

    // ── Database ───────────────────────────────────────────────
    let db_config = DatabaseConfig::new(config.database.connection_url());
    let db = match init_database(&db_config).await {
        Ok(db) => db,
        Err(e) => {
            error!("Failed to connect to database: {}", e);
            return Err(e.into());
        }
    };

    // Fail fast when the store is unreachable instead of surfacing the
    // first request as a 500.
    if let Err(e) = db.ping().await {
        error!("Database connectivity probe failed: {}", e);
        return Err(e.into());
    }

    // ── HTTP server ────────────────────────────────────────────
    let state = ApiState {
        records: Arc::new(SeaOrmServiceRecordRepository::new(db.clone())),
        api_key: config.security.api_key.clone(),
    };
    let app = create_api_router(state);

    let shutdown = ShutdownSignal::new();
    tokio::spawn(listen_for_shutdown_signals(shutdown.clone()));

    let addr = format!("0.0.0.0:{}", config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("HTTP server listening on http://{}", addr);

    let graceful = shutdown.clone();
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            graceful.wait().await;
            info!("HTTP server received shutdown signal");
        })
        .await?;

    // ── Cleanup ────────────────────────────────────────────────
    if let Err(e) = db.close().await {
        error!("Error closing connection pool: {}", e);
        return Err(e.into());
    }
    info!("Connection pool closed");

    Ok(())
}
