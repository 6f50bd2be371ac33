//! API boundary error type
//!
//! Every handler returns `Result<Json<T>, ApiError>`; this is the single
//! place where internal failures become HTTP status codes.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::error;

use crate::api::dto::common::ErrorResponse;
use crate::auth::ApiKeyError;
use crate::domain::DomainError;

#[derive(Debug)]
pub enum ApiError {
    /// The targeted record does not exist (404).
    NotFound,
    /// No API key was presented (401).
    MissingApiKey,
    /// The presented API key does not match the configured secret (403).
    InvalidApiKey,
    /// The request payload is malformed (400).
    Validation(String),
    /// Unexpected store failure (500). The wrapped error is logged
    /// server-side and never sent to the client.
    Internal(DomainError),
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound { .. } => Self::NotFound,
            other => Self::Internal(other),
        }
    }
}

impl From<ApiKeyError> for ApiError {
    fn from(err: ApiKeyError) -> Self {
        match err {
            ApiKeyError::Missing => Self::MissingApiKey,
            ApiKeyError::Invalid => Self::InvalidApiKey,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::NotFound => (StatusCode::NOT_FOUND, "service not found".to_string()),
            Self::MissingApiKey => (StatusCode::UNAUTHORIZED, ApiKeyError::Missing.to_string()),
            Self::InvalidApiKey => (StatusCode::FORBIDDEN, ApiKeyError::Invalid.to_string()),
            Self::Validation(message) => (StatusCode::BAD_REQUEST, message),
            Self::Internal(source) => {
                error!(error = %source, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: ApiError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn errors_map_to_the_documented_status_codes() {
        assert_eq!(status_of(ApiError::NotFound), StatusCode::NOT_FOUND);
        assert_eq!(status_of(ApiError::MissingApiKey), StatusCode::UNAUTHORIZED);
        assert_eq!(status_of(ApiError::InvalidApiKey), StatusCode::FORBIDDEN);
        assert_eq!(
            status_of(ApiError::Validation("bad".to_string())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(ApiError::Internal(DomainError::Database(
                "connection reset".to_string()
            ))),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn domain_not_found_becomes_404() {
        let err = ApiError::from(DomainError::NotFound {
            entity: "service",
            name: "main_service".to_string(),
        });
        assert!(matches!(err, ApiError::NotFound));
    }

    #[test]
    fn other_domain_errors_become_internal() {
        let err = ApiError::from(DomainError::Database("boom".to_string()));
        assert!(matches!(err, ApiError::Internal(_)));
    }
}
