use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::auth::state_store::StateStoreError;
use crate::language_client::LanguageError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Language service error: {0}")]
    Language(#[from] LanguageError),

    #[error("State store error: {0}")]
    StateStore(#[from] StateStoreError),

    #[error("Auth redirect error: {0}")]
    AuthRedirect(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Language(e) => {
                tracing::error!("Language service error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "LANGUAGE_ERROR",
                    "Error analyzing job description".to_string(),
                )
            }
            AppError::StateStore(e) => {
                tracing::error!("State store error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "STATE_STORE_ERROR",
                    "Could not start authentication".to_string(),
                )
            }
            AppError::AuthRedirect(e) => {
                tracing::error!("Auth redirect error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "AUTH_ERROR",
                    "Could not complete LinkedIn sign-in".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "Error processing message".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
