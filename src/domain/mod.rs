//! Domain layer - core entities, types and traits

pub mod error;
pub mod service_record;

pub use error::{DomainError, DomainResult};
pub use service_record::{ServiceRecord, ServiceRecordRepository, ServiceStatus, MAIN_SERVICE};
