//! # API Error Type
//!
//! Unified error type for gateway handlers.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Spicebill                              │
//! │                                                                         │
//! │  Client                      Rust Backend                               │
//! │  ──────                      ────────────                               │
//! │                                                                         │
//! │  POST /customers                                                        │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Handler: Result<T, ApiError>                                    │  │
//! │  │         │                                                        │  │
//! │  │  Domain rejection? ── CoreError::DuplicateCustomer ──┐           │  │
//! │  │         │                                            ▼           │  │
//! │  │  Storage failure?  ── StoreError::Io/Malformed ──► ApiError ───► │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  ◄── 409 { "code": "DUPLICATE_CUSTOMER",                               │
//! │            "message": "Customer already exists: Ravi Stores" }         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Validation and duplicate errors surface with their real message - the
//! caller needs it to re-prompt. Storage internals are logged here and
//! replaced with a generic message; disk paths and parser output are not
//! client business.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use spicebill_core::CoreError;
use spicebill_store::StoreError;

/// API error returned from gateway handlers.
///
/// ## Serialization
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Customer not found: Ravi Stores"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Referenced customer does not exist (404)
    NotFound,

    /// Input validation failed (400)
    ValidationError,

    /// Catalog item already exists (409)
    DuplicateItem,

    /// Customer already registered (409)
    DuplicateCustomer,

    /// Admin token missing or wrong (401)
    Unauthorized,

    /// Document persistence failed (500)
    StorageError,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates an unauthorized error.
    pub fn unauthorized() -> Self {
        ApiError::new(ErrorCode::Unauthorized, "Admin authorization required")
    }

    fn status(&self) -> StatusCode {
        match self.code {
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::ValidationError => StatusCode::BAD_REQUEST,
            ErrorCode::DuplicateItem | ErrorCode::DuplicateCustomer => StatusCode::CONFLICT,
            ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
            ErrorCode::StorageError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(self)).into_response()
    }
}

/// Converts domain errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        let code = match &err {
            CoreError::DuplicateItem(_) => ErrorCode::DuplicateItem,
            CoreError::DuplicateCustomer(_) => ErrorCode::DuplicateCustomer,
            CoreError::CustomerNotFound(_) => ErrorCode::NotFound,
            CoreError::Validation(_) => ErrorCode::ValidationError,
        };
        ApiError::new(code, err.to_string())
    }
}

/// Converts store errors to API errors.
impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Core(core) => core.into(),
            // Log the actual failure but return a generic message
            storage => {
                tracing::error!(error = %storage, "document storage failed");
                ApiError::new(ErrorCode::StorageError, "Document storage failed")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spicebill_core::ValidationError;

    #[test]
    fn test_domain_errors_keep_their_message() {
        let err: ApiError = CoreError::DuplicateCustomer("Ravi".to_string()).into();
        assert_eq!(err.code, ErrorCode::DuplicateCustomer);
        assert_eq!(err.message, "Customer already exists: Ravi");

        let err: ApiError = CoreError::Validation(ValidationError::Required {
            field: "address".to_string(),
        })
        .into();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_storage_errors_are_generic() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "/secret/path gone");
        let err: ApiError = StoreError::io("payments", io).into();
        assert_eq!(err.code, ErrorCode::StorageError);
        assert!(!err.message.contains("/secret/path"));
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::new(ErrorCode::NotFound, "x").status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::new(ErrorCode::DuplicateItem, "x").status(),
            StatusCode::CONFLICT
        );
        assert_eq!(ApiError::unauthorized().status(), StatusCode::UNAUTHORIZED);
    }
}
