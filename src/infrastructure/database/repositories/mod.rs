//! SeaORM repository implementations

pub mod service_record_repository;

pub use service_record_repository::{SeaOrmServiceRecordRepository, SeedOutcome};
