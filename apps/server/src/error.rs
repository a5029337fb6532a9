use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use pushfit_core::auth::AuthError;
use pushfit_core::errors::{DatabaseError, Error as CoreError};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Core(#[from] CoreError),
    #[error("{0}")]
    Unauthorized(String),
    #[error("{0}")]
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    code: u16,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, msg) = match &self {
            ApiError::Core(e) => match e {
                // Name-vs-PIN failures are indistinguishable on the wire.
                CoreError::Auth(AuthError::InvalidPin)
                | CoreError::Auth(AuthError::UserNotFound(_)) => {
                    (StatusCode::UNAUTHORIZED, "Invalid name or PIN".to_string())
                }
                CoreError::Auth(AuthError::TooManyAttempts) => {
                    (StatusCode::TOO_MANY_REQUESTS, e.to_string())
                }
                CoreError::Auth(AuthError::Hashing(_)) => {
                    (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
                }
                CoreError::Validation(_) => (StatusCode::BAD_REQUEST, e.to_string()),
                CoreError::Database(DatabaseError::NotFound(_)) => {
                    (StatusCode::NOT_FOUND, e.to_string())
                }
                CoreError::Database(DatabaseError::UniqueViolation(_))
                | CoreError::ConstraintViolation(_) => (StatusCode::CONFLICT, e.to_string()),
                CoreError::Forbidden(_) => (StatusCode::FORBIDDEN, e.to_string()),
                _ => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
            },
            ApiError::Unauthorized(reason) => (StatusCode::UNAUTHORIZED, reason.clone()),
            ApiError::Internal(reason) => (StatusCode::INTERNAL_SERVER_ERROR, reason.clone()),
        };
        let body = Json(ErrorBody {
            code: status.as_u16(),
            message: msg,
        });
        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
