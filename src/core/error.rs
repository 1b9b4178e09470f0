use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::features::regions::models::UnresolvedPostalCode;
use crate::shared::types::ApiResponse;

/// User-facing message for any postal code that cannot be classified
pub const INVALID_POSTAL_CODE_MESSAGE: &str =
    "Invalid ZIP code. Please enter a valid 4-digit Belgian ZIP code.";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error(transparent)]
    UnresolvedPostalCode(#[from] UnresolvedPostalCode),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, errors) = match self {
            AppError::NotFound(ref msg) => (StatusCode::NOT_FOUND, msg.clone(), None),
            AppError::Validation(ref msg) => (
                StatusCode::BAD_REQUEST,
                msg.clone(),
                Some(vec![msg.clone()]),
            ),
            AppError::BadRequest(ref msg) => (StatusCode::BAD_REQUEST, msg.clone(), None),
            AppError::ExternalServiceError(ref msg) => {
                tracing::error!("External service error: {}", msg);
                (StatusCode::BAD_GATEWAY, msg.clone(), None)
            }
            AppError::UnresolvedPostalCode(ref e) => {
                tracing::debug!("Rejected postal code: {:?}", e.postal_code);
                (
                    StatusCode::BAD_REQUEST,
                    INVALID_POSTAL_CODE_MESSAGE.to_string(),
                    Some(vec![e.to_string()]),
                )
            }
        };

        let body = Json(ApiResponse::<()>::error(Some(message), errors));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unresolved_postal_code_is_bad_request() {
        let err = AppError::from(UnresolvedPostalCode::new("0999"));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_external_service_error_is_bad_gateway() {
        let response = AppError::ExternalServiceError("down".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }
}
