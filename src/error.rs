use serde_json::json;
use std::fmt::Display;

use anyhow::Error as anyhowError;
use axum::{http::StatusCode, response::IntoResponse};

/// Stable machine-readable identifiers surfaced to clients as `error_id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorId {
    MissingParameter,
    AuthorizedUserNotFound,
    RequesteeNotFound,
    FriendExists,
}

impl ErrorId {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorId::MissingParameter => "missing-parameter",
            ErrorId::AuthorizedUserNotFound => "authorized-user-not-found",
            ErrorId::RequesteeNotFound => "requestee-not-found",
            ErrorId::FriendExists => "friend-exists",
        }
    }
}

#[derive(Debug)]
pub enum AppError {
    // 400 bad request
    BadRequest(anyhowError, ErrorId),
    // 403 forbidden
    Forbidden(anyhowError, ErrorId),
    // 404 not found
    NotFound(anyhowError, ErrorId),
    // 500 internal server error
    InternalServerError(anyhowError),
}

impl Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::BadRequest(e, _) => write!(f, "BadRequest: {}", e),
            AppError::Forbidden(e, _) => write!(f, "Forbidden: {}", e),
            AppError::NotFound(e, _) => write!(f, "NotFound: {}", e),
            AppError::InternalServerError(e) => write!(f, "InternalServerError: {}", e),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_id, message) = match &self {
            Self::BadRequest(err, id) => (StatusCode::BAD_REQUEST, Some(*id), err.to_string()),
            Self::Forbidden(err, id) => (StatusCode::FORBIDDEN, Some(*id), err.to_string()),
            Self::NotFound(err, id) => (StatusCode::NOT_FOUND, Some(*id), err.to_string()),
            Self::InternalServerError(err) => {
                // Full detail goes to the log; the client only sees a
                // generic message.
                tracing::error!("internal server error: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    None,
                    StatusCode::INTERNAL_SERVER_ERROR
                        .canonical_reason()
                        .unwrap_or("An error occurred")
                        .to_string(),
                )
            }
        };

        let error_response = match error_id {
            Some(id) => json!({
                "message": message,
                "error_id": id.as_str(),
            }),
            None => json!({
                "message": message,
            }),
        };
        (status, axum::Json(error_response)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
