#![allow(dead_code)]

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// The single user-facing message for any failure of the external analysis
/// call. The underlying cause is logged, never exposed.
pub const ANALYSIS_FAILED_MESSAGE: &str =
    "Failed to architect career roadmap. Please verify system connection.";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("Schema mismatch: {0}")]
    SchemaMismatch(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// The message shown to the caller, also stored as the session error
    /// banner when a submission fails.
    pub fn user_message(&self) -> String {
        match self {
            AppError::NotFound(msg) | AppError::Validation(msg) | AppError::Conflict(msg) => {
                msg.clone()
            }
            AppError::Llm(_) => ANALYSIS_FAILED_MESSAGE.to_string(),
            AppError::SchemaMismatch(report) => {
                format!("Analysis response did not match the expected schema: {report}")
            }
            AppError::Internal(_) => "An internal server error occurred".to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            AppError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            AppError::Conflict(_) => (StatusCode::CONFLICT, "ANALYSIS_IN_FLIGHT"),
            AppError::Llm(cause) => {
                tracing::error!("LLM error: {cause}");
                (StatusCode::BAD_GATEWAY, "ANALYSIS_FAILED")
            }
            AppError::SchemaMismatch(report) => {
                tracing::error!("Schema mismatch in analysis response: {report}");
                (StatusCode::BAD_GATEWAY, "SCHEMA_MISMATCH")
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR")
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": self.user_message()
            }
        }));

        (status, body).into_response()
    }
}
