use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use certa_core::error::ReviewError;
use serde::Serialize;

/// Unified API error type for all route handlers.
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    Conflict(String),
    Unprocessable(String),
    Unavailable(String),
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::Unprocessable(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApiError::Unavailable(msg) => (StatusCode::SERVICE_UNAVAILABLE, msg),
            ApiError::Internal(msg) => {
                tracing::error!("internal error: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error".to_string())
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

impl From<ReviewError> for ApiError {
    fn from(e: ReviewError) -> Self {
        let message = e.to_string();
        match e {
            ReviewError::MissingApplicantInfo | ReviewError::NoDocuments => {
                ApiError::Unprocessable(message)
            }
            ReviewError::UnknownDisease(_)
            | ReviewError::UnknownCriterion { .. }
            | ReviewError::UnknownDocument(_) => ApiError::NotFound(message),
            ReviewError::NoActiveDisease => ApiError::Conflict(message),
            ReviewError::SuggestionServiceUnavailable(_)
            | ReviewError::MalformedSuggestionPayload(_) => ApiError::Unavailable(message),
            ReviewError::PersistenceWriteFailure(_) => ApiError::Internal(message),
        }
    }
}

impl From<base64::DecodeError> for ApiError {
    fn from(e: base64::DecodeError) -> Self {
        ApiError::BadRequest(format!("invalid base64 document data: {e}"))
    }
}
