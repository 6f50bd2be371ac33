//! REST API module
//!
//! HTTP endpoints for reading and writing the activation flag of the
//! main service record, plus health and OpenAPI documentation routes.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;

pub use router::{create_api_router, ApiState};
