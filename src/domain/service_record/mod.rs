//! Service record domain module

pub mod model;
pub mod repository;

pub use model::{ServiceRecord, ServiceStatus, MAIN_SERVICE};
pub use repository::ServiceRecordRepository;
