//! # Unified Error Handling
//!
//! Application-level error type and its status-code mapping.
//!
//! ## Status Mapping
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ValidationError (core)      → ApiError::Validation  → 400             │
//! │  missing row / missing file  → ApiError::NotFound    → 404             │
//! │  DbError (incl. Timeout)     → ApiError::Store       → 500 (logged)    │
//! │  ReceiptStoreError::Io       → ApiError::Io          → 500 (logged)    │
//! │                                                                         │
//! │  405 comes from the method router, preflight from the CORS layer;     │
//! │  neither passes through this type.                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Backend failure detail is logged at the boundary and never leaked to the
//! caller; 5xx responses carry a generic message. Nothing is retried.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::error;

use crate::store::ReceiptStoreError;
use stockroom_core::ValidationError;
use stockroom_db::DbError;

/// Application error enum.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Malformed or contradictory input (400).
    #[error("validation failed: {0}")]
    Validation(String),

    /// Missing identifier or file (404).
    #[error("resource not found: {0}")]
    NotFound(String),

    /// Relational store failure, including statement timeouts (500).
    #[error("store error: {0}")]
    Store(String),

    /// Receipt filesystem failure (500).
    #[error("i/o error: {0}")]
    Io(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),

            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),

            ApiError::Store(msg) => {
                error!(target: "store", error = %msg, "Store error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }

            ApiError::Io(msg) => {
                error!(target: "receipts", error = %msg, "Receipt store error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, message).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::Validation(err.to_string())
    }
}

impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        // Timeouts are a store-failure subtype: same 500, same logging
        ApiError::Store(err.to_string())
    }
}

impl From<ReceiptStoreError> for ApiError {
    fn from(err: ReceiptStoreError) -> Self {
        match err {
            ReceiptStoreError::InvalidName(name) => {
                ApiError::Validation(format!("invalid receipt name: {}", name))
            }
            ReceiptStoreError::NotFound(name) => {
                ApiError::NotFound(format!("receipt {}", name))
            }
            ReceiptStoreError::Io(io_err) => ApiError::Io(io_err.to_string()),
        }
    }
}

/// Result alias for handler functions.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_400() {
        let response = ApiError::Validation("bad id".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let response = ApiError::NotFound("product 999".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_timeout_is_a_store_failure() {
        let err: ApiError = DbError::Timeout.into();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
