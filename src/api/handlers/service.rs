//! Service flag handlers
//!
//! Every handler targets the fixed `main_service` record; no routing
//! parameter selects a different one.

use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;

use crate::api::dto::common::ErrorResponse;
use crate::api::dto::service::{
    ApiKeyBody, ServiceMutationResponse, ServiceStatusResponse, ToggleRequest,
};
use crate::api::error::ApiError;
use crate::api::router::ApiState;
use crate::auth::require_api_key;
use crate::domain::MAIN_SERVICE;

/// Read the current activation state
#[utoipa::path(
    get,
    path = "/api/service/status",
    tag = "Service",
    responses(
        (status = 200, description = "Current state of the service record", body = ServiceStatusResponse),
        (status = 404, description = "Service record does not exist", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn service_status(
    State(state): State<ApiState>,
) -> Result<Json<ServiceStatusResponse>, ApiError> {
    let record = state
        .records
        .find_by_name(MAIN_SERVICE)
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(ServiceStatusResponse::from(record)))
}

/// Write the flag and build the shared success response.
async fn apply_active(
    state: &ApiState,
    active: bool,
) -> Result<Json<ServiceMutationResponse>, ApiError> {
    state.records.set_active(MAIN_SERVICE, active).await?;
    Ok(Json(ServiceMutationResponse::new(active)))
}

/// Activate the service (public)
#[utoipa::path(
    get,
    path = "/api/service/activate",
    tag = "Service",
    responses(
        (status = 200, description = "Service activated", body = ServiceMutationResponse),
        (status = 404, description = "Service record does not exist", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn activate_service(
    State(state): State<ApiState>,
) -> Result<Json<ServiceMutationResponse>, ApiError> {
    apply_active(&state, true).await
}

/// Deactivate the service (public)
#[utoipa::path(
    get,
    path = "/api/service/deactivate",
    tag = "Service",
    responses(
        (status = 200, description = "Service deactivated", body = ServiceMutationResponse),
        (status = 404, description = "Service record does not exist", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn deactivate_service(
    State(state): State<ApiState>,
) -> Result<Json<ServiceMutationResponse>, ApiError> {
    apply_active(&state, false).await
}

/// Activate the service (requires API key)
#[utoipa::path(
    post,
    path = "/api/service/activate",
    tag = "Service",
    security(("api_key" = [])),
    request_body(content = ApiKeyBody, description = "Optional API key fallback"),
    responses(
        (status = 200, description = "Service activated", body = ServiceMutationResponse),
        (status = 401, description = "API key missing", body = ErrorResponse),
        (status = 403, description = "API key invalid", body = ErrorResponse),
        (status = 404, description = "Service record does not exist", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn activate_service_protected(
    State(state): State<ApiState>,
    headers: HeaderMap,
    body: Option<Json<ApiKeyBody>>,
) -> Result<Json<ServiceMutationResponse>, ApiError> {
    let body = body.map(|Json(b)| b).unwrap_or_default();
    require_api_key(&headers, body.api_key.as_deref(), &state.api_key)?;

    apply_active(&state, true).await
}

/// Deactivate the service (requires API key)
#[utoipa::path(
    post,
    path = "/api/service/deactivate",
    tag = "Service",
    security(("api_key" = [])),
    request_body(content = ApiKeyBody, description = "Optional API key fallback"),
    responses(
        (status = 200, description = "Service deactivated", body = ServiceMutationResponse),
        (status = 401, description = "API key missing", body = ErrorResponse),
        (status = 403, description = "API key invalid", body = ErrorResponse),
        (status = 404, description = "Service record does not exist", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn deactivate_service_protected(
    State(state): State<ApiState>,
    headers: HeaderMap,
    body: Option<Json<ApiKeyBody>>,
) -> Result<Json<ServiceMutationResponse>, ApiError> {
    let body = body.map(|Json(b)| b).unwrap_or_default();
    require_api_key(&headers, body.api_key.as_deref(), &state.api_key)?;

    apply_active(&state, false).await
}

/// Set the flag to an explicit value (requires API key)
#[utoipa::path(
    post,
    path = "/api/service/toggle",
    tag = "Service",
    security(("api_key" = [])),
    request_body(content = ToggleRequest, description = "Desired flag value"),
    responses(
        (status = 200, description = "Flag set to the requested value", body = ServiceMutationResponse),
        (status = 400, description = "`active` is missing or not a boolean", body = ErrorResponse),
        (status = 401, description = "API key missing", body = ErrorResponse),
        (status = 403, description = "API key invalid", body = ErrorResponse),
        (status = 404, description = "Service record does not exist", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn toggle_service(
    State(state): State<ApiState>,
    headers: HeaderMap,
    body: Option<Json<ToggleRequest>>,
) -> Result<Json<ServiceMutationResponse>, ApiError> {
    let body = body.map(|Json(b)| b).unwrap_or_default();
    require_api_key(&headers, body.api_key.as_deref(), &state.api_key)?;

    let active = body
        .active
        .as_ref()
        .and_then(serde_json::Value::as_bool)
        .ok_or_else(|| {
            ApiError::Validation("field \"active\" must be a boolean (true/false)".to_string())
        })?;

    apply_active(&state, active).await
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use axum::response::Response;
    use axum::Router;
    use chrono::Utc;
    use tower::ServiceExt;

    use crate::api::router::create_api_router;
    use crate::auth::API_KEY_HEADER;
    use crate::domain::{DomainError, DomainResult, ServiceRecord, ServiceRecordRepository};

    use super::*;

    const TEST_KEY: &str = "test-api-key";

    struct FakeRepository {
        record: Mutex<Option<ServiceRecord>>,
        fail: bool,
    }

    impl FakeRepository {
        fn with_record(active: bool) -> Arc<Self> {
            let now = Utc::now();
            Arc::new(Self {
                record: Mutex::new(Some(ServiceRecord {
                    name: MAIN_SERVICE.to_string(),
                    active,
                    created_at: now,
                    updated_at: now,
                })),
                fail: false,
            })
        }

        fn empty() -> Arc<Self> {
            Arc::new(Self {
                record: Mutex::new(None),
                fail: false,
            })
        }

        fn failing() -> Arc<Self> {
            Arc::new(Self {
                record: Mutex::new(None),
                fail: true,
            })
        }

        fn active(&self) -> Option<bool> {
            self.record.lock().unwrap().as_ref().map(|r| r.active)
        }
    }

    #[async_trait]
    impl ServiceRecordRepository for FakeRepository {
        async fn find_by_name(&self, name: &str) -> DomainResult<Option<ServiceRecord>> {
            if self.fail {
                return Err(DomainError::Database("connection reset".to_string()));
            }
            Ok(self
                .record
                .lock()
                .unwrap()
                .clone()
                .filter(|r| r.name == name))
        }

        async fn set_active(&self, name: &str, active: bool) -> DomainResult<()> {
            if self.fail {
                return Err(DomainError::Database("connection reset".to_string()));
            }
            let mut guard = self.record.lock().unwrap();
            match guard.as_mut().filter(|r| r.name == name) {
                Some(record) => {
                    record.active = active;
                    record.updated_at = Utc::now();
                    Ok(())
                }
                None => Err(DomainError::NotFound {
                    entity: "service",
                    name: name.to_string(),
                }),
            }
        }
    }

    fn test_router(repo: Arc<FakeRepository>) -> Router {
        create_api_router(ApiState {
            records: repo,
            api_key: TEST_KEY.to_string(),
        })
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("request should build")
    }

    fn post_json(uri: &str, key: Option<&str>, body: serde_json::Value) -> Request<Body> {
        let mut builder = Request::builder()
            .uri(uri)
            .method("POST")
            .header("content-type", "application/json");
        if let Some(key) = key {
            builder = builder.header(API_KEY_HEADER, key);
        }
        builder
            .body(Body::from(body.to_string()))
            .expect("request should build")
    }

    fn post_empty(uri: &str, key: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().uri(uri).method("POST");
        if let Some(key) = key {
            builder = builder.header(API_KEY_HEADER, key);
        }
        builder.body(Body::empty()).expect("request should build")
    }

    async fn send(router: &Router, request: Request<Body>) -> Response {
        router
            .clone()
            .oneshot(request)
            .await
            .expect("request should not fail at the transport level")
    }

    async fn response_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), 64 * 1024)
            .await
            .expect("body should be readable");
        serde_json::from_slice(&bytes).expect("body should be JSON")
    }

    #[tokio::test]
    async fn status_reports_the_inactive_flag() {
        let router = test_router(FakeRepository::with_record(false));

        let response = send(&router, get("/api/service/status")).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = response_json(response).await;
        assert_eq!(
            body,
            serde_json::json!({
                "service": "main_service",
                "active": false,
                "status": "inactive"
            })
        );
    }

    #[tokio::test]
    async fn status_returns_404_when_the_record_is_missing() {
        let router = test_router(FakeRepository::empty());

        let response = send(&router, get("/api/service/status")).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = response_json(response).await;
        assert_eq!(body["error"], "service not found");
    }

    #[tokio::test]
    async fn get_activate_then_status_reports_active() {
        let router = test_router(FakeRepository::with_record(false));

        let response = send(&router, get("/api/service/activate")).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = response_json(response).await;
        assert_eq!(body["service"], "main_service");
        assert_eq!(body["active"], true);

        let status = response_json(send(&router, get("/api/service/status")).await).await;
        assert_eq!(status["active"], true);
        assert_eq!(status["status"], "active");
    }

    #[tokio::test]
    async fn get_deactivate_then_status_reports_inactive() {
        let router = test_router(FakeRepository::with_record(true));

        let response = send(&router, get("/api/service/deactivate")).await;
        assert_eq!(response.status(), StatusCode::OK);

        let status = response_json(send(&router, get("/api/service/status")).await).await;
        assert_eq!(status["active"], false);
        assert_eq!(status["status"], "inactive");
    }

    #[tokio::test]
    async fn get_activate_returns_404_when_the_record_is_missing() {
        let router = test_router(FakeRepository::empty());

        let response = send(&router, get("/api/service/activate")).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn post_activate_without_key_is_unauthorized() {
        let repo = FakeRepository::with_record(false);
        let router = test_router(repo.clone());

        let response = send(&router, post_empty("/api/service/activate", None)).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(repo.active(), Some(false));
    }

    #[tokio::test]
    async fn post_activate_with_wrong_key_is_forbidden() {
        let repo = FakeRepository::with_record(false);
        let router = test_router(repo.clone());

        let response = send(&router, post_empty("/api/service/activate", Some("nope"))).await;
        assert_eq!(response.status(), StatusCode::FORBIDDEN);

        let body = response_json(response).await;
        assert_eq!(body["error"], "invalid API key");
        assert_eq!(repo.active(), Some(false));
    }

    #[tokio::test]
    async fn post_activate_with_header_key_sets_the_flag() {
        let repo = FakeRepository::with_record(false);
        let router = test_router(repo.clone());

        let response = send(&router, post_empty("/api/service/activate", Some(TEST_KEY))).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(repo.active(), Some(true));
    }

    #[tokio::test]
    async fn post_deactivate_accepts_the_key_in_the_body() {
        let repo = FakeRepository::with_record(true);
        let router = test_router(repo.clone());

        let response = send(
            &router,
            post_json(
                "/api/service/deactivate",
                None,
                serde_json::json!({ "api_key": TEST_KEY }),
            ),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(repo.active(), Some(false));
    }

    #[tokio::test]
    async fn toggle_round_trips_both_values() {
        let router = test_router(FakeRepository::with_record(false));

        for value in [true, false] {
            let response = send(
                &router,
                post_json(
                    "/api/service/toggle",
                    Some(TEST_KEY),
                    serde_json::json!({ "active": value }),
                ),
            )
            .await;
            assert_eq!(response.status(), StatusCode::OK);

            let status = response_json(send(&router, get("/api/service/status")).await).await;
            assert_eq!(status["active"], value);
        }
    }

    #[tokio::test]
    async fn toggle_rejects_a_non_boolean_active() {
        let repo = FakeRepository::with_record(true);
        let router = test_router(repo.clone());

        let response = send(
            &router,
            post_json(
                "/api/service/toggle",
                Some(TEST_KEY),
                serde_json::json!({ "active": "yes" }),
            ),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        // The flag is unchanged from its prior state.
        assert_eq!(repo.active(), Some(true));
    }

    #[tokio::test]
    async fn toggle_without_a_body_is_rejected() {
        let router = test_router(FakeRepository::with_record(false));

        let response = send(&router, post_empty("/api/service/toggle", Some(TEST_KEY))).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn toggle_checks_the_key_before_the_payload() {
        let router = test_router(FakeRepository::with_record(false));

        let response = send(
            &router,
            post_json(
                "/api/service/toggle",
                None,
                serde_json::json!({ "active": true }),
            ),
        )
        .await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn store_failures_surface_as_a_generic_500() {
        let router = test_router(FakeRepository::failing());

        let response = send(&router, get("/api/service/status")).await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = response_json(response).await;
        assert_eq!(body["error"], "internal server error");
    }

    #[tokio::test]
    async fn health_endpoint_reports_ok() {
        let router = test_router(FakeRepository::empty());

        let response = send(&router, get("/health")).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = response_json(response).await;
        assert_eq!(body["status"], "ok");
    }
}
