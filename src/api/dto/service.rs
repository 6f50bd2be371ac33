//! Service endpoint DTOs

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::domain::{ServiceRecord, MAIN_SERVICE};

/// Current state of the service record.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ServiceStatusResponse {
    /// Name of the service record
    pub service: String,
    /// Current value of the activation flag
    pub active: bool,
    /// `active` or `inactive`
    pub status: String,
}

impl From<ServiceRecord> for ServiceStatusResponse {
    fn from(record: ServiceRecord) -> Self {
        let status = record.status().as_str().to_string();
        Self {
            service: record.name,
            active: record.active,
            status,
        }
    }
}

/// Response returned by every mutating endpoint.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ServiceMutationResponse {
    /// What happened
    pub message: String,
    /// Name of the service record
    pub service: String,
    /// Value the flag was set to
    pub active: bool,
}

impl ServiceMutationResponse {
    pub fn new(active: bool) -> Self {
        let message = if active {
            "Service activated successfully"
        } else {
            "Service deactivated successfully"
        };
        Self {
            message: message.to_string(),
            service: MAIN_SERVICE.to_string(),
            active,
        }
    }
}

/// Optional body accepted by POST activate/deactivate.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct ApiKeyBody {
    /// API key fallback when the `x-api-key` header is absent
    pub api_key: Option<String>,
}

/// Body for POST `/api/service/toggle`.
///
/// `active` is kept as a raw JSON value so a non-boolean can be rejected
/// with a 400 instead of a generic deserialization failure.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct ToggleRequest {
    /// Desired flag value; must be a JSON boolean
    #[schema(value_type = Option<bool>)]
    pub active: Option<Value>,
    /// API key fallback when the `x-api-key` header is absent
    pub api_key: Option<String>,
}
