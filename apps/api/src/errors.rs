use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

use crate::assessment::scoring::ScoringError;
use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Uniform body carried by every error response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub error: bool,
    pub status_code: u16,
    pub message: String,
}

impl From<ScoringError> for AppError {
    fn from(e: ScoringError) -> Self {
        AppError::Validation(e.to_string())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

/// Client-facing category for a storage failure; driver text stays in the logs.
fn database_failure(e: &sqlx::Error) -> &'static str {
    match e {
        sqlx::Error::PoolTimedOut => "timed out waiting for a database connection",
        sqlx::Error::PoolClosed | sqlx::Error::Io(_) | sqlx::Error::Tls(_) => {
            "the database is unreachable"
        }
        sqlx::Error::Database(_) => "the database rejected the write or query",
        sqlx::Error::RowNotFound => "an expected record was missing",
        sqlx::Error::ColumnDecode { .. } | sqlx::Error::Decode(_) => {
            "a stored record could not be read"
        }
        _ => "the storage operation failed",
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Database(e) => {
                tracing::error!("Database error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Database error: {}", database_failure(e)),
                )
            }
            AppError::Llm(e) => {
                tracing::error!("LLM error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Personality narrative could not be generated: {e}"),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(ErrorBody {
            error: true,
            status_code: status.as_u16(),
            message,
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(err: AppError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_not_found_envelope() {
        let (status, body) = body_json(AppError::NotFound("Assessment not found".into())).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], true);
        assert_eq!(body["status_code"], 404);
        assert_eq!(body["message"], "Assessment not found");
    }

    #[tokio::test]
    async fn test_validation_is_bad_request() {
        let (status, body) = body_json(AppError::Validation("bad".into())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["status_code"], 400);
    }

    #[tokio::test]
    async fn test_llm_error_is_descriptive_server_error() {
        let (status, body) = body_json(AppError::Llm(LlmError::EmptyContent)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["message"]
            .as_str()
            .unwrap()
            .contains("LLM returned empty content"));
    }

    #[tokio::test]
    async fn test_database_error_hides_driver_detail() {
        let (status, body) = body_json(AppError::Database(sqlx::Error::PoolTimedOut)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body["message"],
            "Database error: timed out waiting for a database connection"
        );
    }

    #[tokio::test]
    async fn test_database_error_names_failure_category() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "10.0.0.5:5432 refused");
        let (_, body) = body_json(AppError::Database(sqlx::Error::Io(io))).await;
        let message = body["message"].as_str().unwrap();
        assert_eq!(message, "Database error: the database is unreachable");
        assert!(!message.contains("10.0.0.5"));
    }
}
