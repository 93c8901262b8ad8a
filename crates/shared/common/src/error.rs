//! Unified error handling with HTTP status mapping.
//!
//! Every layer above the domain reports failures as [`AppError`], which knows
//! its status code, a stable client-facing code and a message that hides
//! internal details.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use domain::{DomainError, ValidationError};
use serde::Serialize;
use thiserror::Error;

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    // Resource errors
    #[error("Resource not found")]
    NotFound,

    // Validation
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Invalid input: {0}")]
    BadRequest(String),

    // Payload could not be decoded
    #[error("Malformed payload: {0}")]
    Malformed(String),

    // Internal
    #[error("Internal server error")]
    Internal(String),
}

/// Error response body for HTTP
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    code: String,
    message: String,
}

impl AppError {
    /// Get error code for client
    pub fn code(&self) -> String {
        match self {
            AppError::NotFound => "NOT_FOUND".to_string(),
            AppError::Validation(err) => err.code(),
            AppError::BadRequest(_) => "BAD_REQUEST".to_string(),
            AppError::Malformed(_) => "MALFORMED_PAYLOAD".to_string(),
            AppError::Internal(_) => "INTERNAL_ERROR".to_string(),
        }
    }

    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Validation(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Malformed(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            // Show full message for client errors
            AppError::Validation(err) => err.to_string(),
            AppError::BadRequest(msg) => msg.clone(),

            // Hide details for internal errors
            AppError::Malformed(msg) => {
                tracing::error!("Malformed payload: {}", msg);
                "The request payload could not be read".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }

            // Use default message for others
            _ => self.to_string(),
        }
    }
}

// =============================================================================
// HTTP Response (Axum)
// =============================================================================

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.code(),
                message: self.user_message(),
            },
        };

        (status, Json(body)).into_response()
    }
}

// =============================================================================
// Domain Error Conversion
// =============================================================================

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(err) => AppError::Validation(err),
            DomainError::Malformed(msg) => AppError::Malformed(msg),
            DomainError::InvalidPayload(msg) => AppError::BadRequest(msg),
            DomainError::NotFound(_) => AppError::NotFound,
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    fn ok_or_not_found(self) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self) -> AppResult<T> {
        self.ok_or(AppError::NotFound)
    }
}

/// Convenience constructors
impl AppError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        AppError::BadRequest(msg.into())
    }

    pub fn malformed(msg: impl Into<String>) -> Self {
        AppError::Malformed(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::{Address, Field, RegisteredAddress};

    #[test]
    fn test_validation_maps_to_bad_request() {
        let err = AppError::from(ValidationError::InvalidId {
            field: Field::AddressId,
        });
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.code(), "ADDRESS_ID_INVALID");
        assert_eq!(err.user_message(), "address id should be a positive number");
    }

    #[test]
    fn test_malformed_maps_to_internal_error() {
        let err: AppError = Address::from_json("{\"Street\": \"abc").unwrap_err().into();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.code(), "MALFORMED_PAYLOAD");
        assert!(!err.user_message().contains("EOF"));
    }

    #[test]
    fn test_negative_id_maps_to_bad_request() {
        let err: AppError = RegisteredAddress::from_json(r#"{"id": -1}"#)
            .unwrap_err()
            .into();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_wrong_typed_id_maps_to_bad_request() {
        let json = r#"{
            "id": "", "Street": "Street ABCD", "District": "District", "City": "City",
            "State": "State", "Complement": "", "Number": "11111", "Zipcode": "23970000",
            "Latitude": "-23.307577", "Longitude": "-44.754146"
        }"#;
        let err: AppError = RegisteredAddress::from_json(json).unwrap_err().into();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.code(), "BAD_REQUEST");
    }

    #[test]
    fn test_null_field_maps_to_bad_request() {
        let err: AppError = Address::from_json(r#"{"Street": null}"#).unwrap_err().into();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_domain_not_found() {
        let err = AppError::from(DomainError::not_found("address"));
        assert!(matches!(err, AppError::NotFound));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_option_ext() {
        let found: AppResult<i32> = Some(1).ok_or_not_found();
        assert_eq!(found.unwrap(), 1);

        let missing: AppResult<i32> = None.ok_or_not_found();
        assert!(matches!(missing, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn test_into_response_body() {
        let err = AppError::from(ValidationError::NotNumeric {
            field: Field::Zipcode,
        });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"]["code"], "ZIPCODE_NOT_NUMERIC");
        assert_eq!(body["error"]["message"], "zipcode should contain only digits");
    }
}
