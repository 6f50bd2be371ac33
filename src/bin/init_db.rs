//!
//! One-shot schema initializer.
//!
//! Creates the `services` table if it does not exist and seeds the
//! default `main_service` record (inactive). Safe to run repeatedly;
//! intended to run separately from the HTTP service.

use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;
use tracing::{error, info, warn};

use service_switch::config::DatabaseSettings;
use service_switch::domain::MAIN_SERVICE;
use service_switch::infrastructure::database::migrator::Migrator;
use service_switch::infrastructure::database::repositories::{
    SeaOrmServiceRecordRepository, SeedOutcome,
};
use service_switch::{init_database, DatabaseConfig};

/// Run migrations and seed the default record.
async fn initialize(db: &DatabaseConnection) -> Result<SeedOutcome, Box<dyn std::error::Error>> {
    info!("Running database migrations...");
    Migrator::up(db, None).await?;
    info!("Table \"services\" is ready");

    let repo = SeaOrmServiceRecordRepository::new(db.clone());
    let outcome = repo.seed_default().await?;
    Ok(outcome)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let settings = match DatabaseSettings::from_env() {
        Ok(settings) => settings,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            return Err(e.into());
        }
    };

    // A single connection is enough for a one-shot run.
    let mut db_config = DatabaseConfig::new(settings.connection_url());
    db_config.max_connections = 1;

    let db = match init_database(&db_config).await {
        Ok(db) => db,
        Err(e) => {
            error!("Failed to connect to database: {}", e);
            return Err(e.into());
        }
    };

    // The connection is released on every exit path below.
    let result = initialize(&db).await;

    if let Err(e) = db.close().await {
        warn!("Error closing database connection: {}", e);
    } else {
        info!("Database connection closed");
    }

    match result {
        Ok(SeedOutcome::Created) => info!("Default service record \"{}\" created", MAIN_SERVICE),
        Ok(SeedOutcome::AlreadyPresent) => {
            info!("Default service record \"{}\" already exists", MAIN_SERVICE)
        }
        Err(e) => {
            error!("Database initialization failed: {}", e);
            return Err(e);
        }
    }

    info!("Database initialized successfully");
    Ok(())
}
