//! # HTTP API Errors
//!
//! Error types for the customer routes. Every error renders as
//! `{"error": "<message>"}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::insert::InsertRejection;

/// Result type for route handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// HTTP API errors
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// No record with the requested id
    #[error("Customer not found")]
    NotFound,

    /// Insertion pipeline refused the payload
    #[error(transparent)]
    Rejected(#[from] InsertRejection),

    /// Request body is not a JSON object
    #[error("Invalid request body: {0}")]
    InvalidBody(String),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Rejected(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl From<ApiError> for ErrorResponse {
    fn from(err: ApiError) -> Self {
        Self {
            error: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::from(self));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::Rejected(InsertRejection::DuplicateId).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::InvalidBody("eof".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_rejection_message_passes_through() {
        let body = ErrorResponse::from(ApiError::from(InsertRejection::InvalidCityOrCompany));
        assert_eq!(body.error, "Invalid city or company");
    }

    #[test]
    fn test_not_found_body() {
        let json = serde_json::to_value(ErrorResponse::from(ApiError::NotFound)).unwrap();
        assert_eq!(json, serde_json::json!({"error": "Customer not found"}));
    }
}
