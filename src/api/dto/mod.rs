//! API DTOs

pub mod common;
pub mod service;

pub use common::ErrorResponse;
pub use service::{ApiKeyBody, ServiceMutationResponse, ServiceStatusResponse, ToggleRequest};
