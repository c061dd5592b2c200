pub mod features;
pub mod health;
pub mod settings;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use axum_valid::{ValidRejection, ValidationRejection};
use compute::ComputeError;
use thiserror::Error;

use crate::schemas::ErrorResponse;

/// Errors a handler turns into an [`ErrorResponse`].
#[derive(Error, Debug)]
pub enum ApiError {
    /// Body that is not JSON or does not match the request schema
    #[error("{0}")]
    InvalidBody(String),
    /// Fields outside their allowed range
    #[error("{0}")]
    Validation(String),
    #[error(transparent)]
    Compute(#[from] ComputeError),
}

impl ApiError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::InvalidBody(_) => (StatusCode::BAD_REQUEST, "INVALID_BODY"),
            ApiError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            ApiError::Compute(ComputeError::InvalidWindow(_)) => {
                (StatusCode::BAD_REQUEST, "INVALID_WINDOW")
            }
            ApiError::Compute(_) => (StatusCode::UNPROCESSABLE_ENTITY, "COMPUTE_ERROR"),
        }
    }
}

impl From<ValidRejection<JsonRejection>> for ApiError {
    fn from(rejection: ValidRejection<JsonRejection>) -> Self {
        match rejection {
            ValidationRejection::Valid(errors) => ApiError::Validation(errors.to_string()),
            ValidationRejection::Inner(json) => ApiError::InvalidBody(json.body_text()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        let body = ErrorResponse {
            error: self.to_string(),
            code: code.to_string(),
            success: false,
        };
        (status, Json(body)).into_response()
    }
}
