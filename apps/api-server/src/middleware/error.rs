//! Error handling middleware - maps failures to HTTP responses.
//!
//! Not-found and missing-body cases keep the bare status the API has always
//! returned; everything carrying a detail uses an RFC 7807 problem body.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use codepulse_core::error::RepoError;
use codepulse_shared::{ErrorResponse, MessageResponse, PatchError};
use std::fmt;

/// Application-level error type.
#[derive(Debug)]
pub enum AppError {
    /// 404, with an optional `{ "message": ... }` body.
    NotFound(Option<String>),
    /// 400, with an optional problem detail.
    BadRequest(Option<String>),
    Conflict(String),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(Some(msg)) => write!(f, "Not found: {}", msg),
            AppError::NotFound(None) => write!(f, "Not found"),
            AppError::BadRequest(Some(msg)) => write!(f, "Bad request: {}", msg),
            AppError::BadRequest(None) => write!(f, "Bad request"),
            AppError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        match self {
            AppError::NotFound(None) | AppError::BadRequest(None) => builder.finish(),
            AppError::NotFound(Some(message)) => builder.json(MessageResponse::new(message)),
            AppError::BadRequest(Some(detail)) => builder.json(ErrorResponse::bad_request(detail)),
            AppError::Conflict(detail) => builder.json(ErrorResponse::conflict(detail)),
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                builder.json(ErrorResponse::internal_error())
            }
        }
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Constraint(msg) => AppError::Conflict(msg),
            RepoError::Connection(msg) => {
                tracing::error!("Database connection error: {}", msg);
                AppError::Internal("Database error".to_string())
            }
            RepoError::Query(msg) => {
                tracing::error!("Database query error: {}", msg);
                AppError::Internal("Database error".to_string())
            }
        }
    }
}

impl From<PatchError> for AppError {
    fn from(err: PatchError) -> Self {
        AppError::BadRequest(Some(err.to_string()))
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[actix_rt::test]
    async fn test_not_found_without_message_has_empty_body() {
        let response = AppError::NotFound(None).error_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = to_bytes(response.into_body()).await.unwrap();
        assert!(body.is_empty());
    }

    #[actix_rt::test]
    async fn test_not_found_with_message() {
        let response = AppError::NotFound(Some("Category not found.".to_string())).error_response();

        let body = to_bytes(response.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json, serde_json::json!({ "message": "Category not found." }));
    }

    #[test]
    fn test_repo_errors_map_to_status() {
        let conflict: AppError = RepoError::Constraint("dup".to_string()).into();
        assert_eq!(conflict.status_code(), StatusCode::CONFLICT);

        let internal: AppError = RepoError::Connection("refused".to_string()).into();
        assert_eq!(internal.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_patch_error_is_bad_request() {
        let err: AppError = PatchError::PathNotFound("/id".to_string()).into();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }
}
