//! API Router with OpenAPI documentation

use std::sync::Arc;

use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::dto::common::ErrorResponse;
use crate::api::dto::service::{
    ApiKeyBody, ServiceMutationResponse, ServiceStatusResponse, ToggleRequest,
};
use crate::api::handlers::{health, service};
use crate::auth::API_KEY_HEADER;
use crate::domain::ServiceRecordRepository;

/// State shared by every handler, created once at startup.
#[derive(Clone)]
pub struct ApiState {
    /// Persistence seam for the service record.
    pub records: Arc<dyn ServiceRecordRepository>,
    /// Shared secret required by the POST endpoints.
    pub api_key: String,
}

/// Security scheme modifier for OpenAPI
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "api_key",
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new(API_KEY_HEADER))),
            );
        }
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        service::service_status,
        service::activate_service,
        service::deactivate_service,
        service::activate_service_protected,
        service::deactivate_service_protected,
        service::toggle_service,
    ),
    components(
        schemas(
            ErrorResponse,
            ServiceStatusResponse,
            ServiceMutationResponse,
            ApiKeyBody,
            ToggleRequest,
            health::HealthResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Liveness probe for availability monitoring."),
        (name = "Service", description = "Read and write the activation flag of the main service record. GET endpoints are public; POST endpoints require the shared API key in the `x-api-key` header or as `api_key` in the JSON body.")
    ),
    info(
        title = "Service Switch API",
        version = "0.1.0",
        description = "HTTP interface for the activation flag of the `main_service` record."
    )
)]
pub struct ApiDoc;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Create the API router with all routes
pub fn create_api_router(state: ApiState) -> Router {
    // All cross-origin requests are permitted.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health::health_check))
        .route("/api-docs/openapi.json", get(openapi_json))
        .route("/api/service/status", get(service::service_status))
        .route(
            "/api/service/activate",
            get(service::activate_service).post(service::activate_service_protected),
        )
        .route(
            "/api/service/deactivate",
            get(service::deactivate_service).post(service::deactivate_service_protected),
        )
        .route("/api/service/toggle", post(service::toggle_service))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
