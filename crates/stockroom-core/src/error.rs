//! # Error Types
//!
//! Domain-level validation errors.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  stockroom-core (this file)                                            │
//! │  └── ValidationError  - Input validation failures (→ 400)              │
//! │                                                                         │
//! │  stockroom-db (separate crate)                                         │
//! │  └── DbError          - Database operation failures (→ 500)            │
//! │                                                                         │
//! │  rest-api (application)                                                │
//! │  └── ApiError         - Status-code mapping at the HTTP boundary       │
//! │                                                                         │
//! │  Flow: ValidationError / DbError → ApiError → HTTP response            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Input validation errors.
///
/// These occur when a request payload violates an identity or shape rule.
/// The HTTP layer maps every variant to 400 Bad Request.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// A server-assigned identifier was supplied on a create request.
    #[error("{field} must be zero or omitted when creating a record")]
    IdentifierAssigned { field: String },

    /// Body identifier does not match the path identifier on a replace.
    #[error("{field} does not match the request path: body {body}, path {path}")]
    IdentifierMismatch {
        field: String,
        body: i64,
        path: i64,
    },
}

/// Convenience type alias for validation results.
pub type ValidationResult<T> = Result<T, ValidationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ValidationError::Required {
            field: "receipt".to_string(),
        };
        assert_eq!(err.to_string(), "receipt is required");

        let err = ValidationError::IdentifierAssigned {
            field: "productId".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "productId must be zero or omitted when creating a record"
        );

        let err = ValidationError::IdentifierMismatch {
            field: "productId".to_string(),
            body: 6,
            path: 5,
        };
        assert_eq!(
            err.to_string(),
            "productId does not match the request path: body 6, path 5"
        );
    }
}
