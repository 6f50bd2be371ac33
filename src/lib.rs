//! # Service Switch
//!
//! Minimal HTTP service exposing the activation state of a single named
//! service record stored in MySQL.
//!
//! ## Architecture
//!
//! The project follows Clean Architecture principles:
//!
//! - **domain**: Core business entities, types and traits
//! - **infrastructure**: External concerns (database, migrations, repositories)
//! - **api**: REST API with OpenAPI documentation
//! - **auth**: API key gate for mutating endpoints
//! - **shared**: Graceful shutdown helpers

pub mod api;
pub mod auth;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod shared;

pub use config::AppConfig;

// Re-export database types for easy access
pub use infrastructure::{init_database, DatabaseConfig};

// Re-export API router
pub use api::{create_api_router, ApiState};
