//! API Error Types
//!
//! Central error taxonomy for all request handling. Every variant maps to a
//! stable numeric code and an HTTP status, and renders through the unified
//! [`ApiResponse`] envelope.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::gateway::types::{ApiResponse, error_codes};

/// Request handling errors
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Authentication required")]
    Unauthorized,

    #[error("{0}")]
    AuthFailed(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Get the numeric error code for API responses
    pub fn code(&self) -> i32 {
        match self {
            ApiError::Unauthorized => error_codes::MISSING_AUTH,
            ApiError::AuthFailed(_) => error_codes::AUTH_FAILED,
            ApiError::Forbidden(_) => error_codes::FORBIDDEN,
            ApiError::NotFound(_) => error_codes::NOT_FOUND,
            ApiError::Validation(_) => error_codes::INVALID_PARAMETER,
            ApiError::Conflict(_) => error_codes::CONFLICT,
            ApiError::Database(_) | ApiError::Internal(_) => error_codes::INTERNAL_ERROR,
        }
    }

    /// Get the HTTP status for this error
    pub fn http_status(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized | ApiError::AuthFailed(_) => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Database(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Shorthand for the ownership rejection used across order endpoints
    pub fn forbidden(reason: impl Into<String>) -> Self {
        ApiError::Forbidden(reason.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if matches!(self, ApiError::Database(_) | ApiError::Internal(_)) {
            tracing::error!("Request failed: {}", self);
        }
        let body = Json(ApiResponse::<()>::error(self.code(), self.to_string()));
        (self.http_status(), body).into_response()
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(e: sqlx::Error) -> Self {
        if let sqlx::Error::Database(ref db_err) = e {
            // 23505 = unique_violation
            if db_err.code().as_deref() == Some("23505") {
                return ApiError::Conflict("Resource already exists".to_string());
            }
        }
        ApiError::Database(e.to_string())
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(e: validator::ValidationErrors) -> Self {
        ApiError::Validation(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(ApiError::Unauthorized.code(), error_codes::MISSING_AUTH);
        assert_eq!(
            ApiError::Forbidden("nope".into()).code(),
            error_codes::FORBIDDEN
        );
        assert_eq!(ApiError::NotFound("Order").code(), error_codes::NOT_FOUND);
        assert_eq!(
            ApiError::Validation("bad".into()).code(),
            error_codes::INVALID_PARAMETER
        );
    }

    #[test]
    fn test_http_status() {
        assert_eq!(ApiError::Unauthorized.http_status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            ApiError::Forbidden("nope".into()).http_status(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(ApiError::NotFound("Order").http_status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::Conflict("dup".into()).http_status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ApiError::Database("boom".into()).http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(ApiError::NotFound("Order").to_string(), "Order not found");
        assert_eq!(
            ApiError::Forbidden("Incorrect user for order ID".into()).to_string(),
            "Incorrect user for order ID"
        );
    }
}
