#![allow(dead_code)]

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::gemini::GeminiError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Errors are terminal per request and never fatal to the session: a failed
/// analysis leaves the store untouched and the caller free to resubmit.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("No API key configured")]
    MissingApiKey,

    #[error("Request superseded by a newer one")]
    Superseded,

    #[error("Gemini error: {0}")]
    Gemini(#[from] GeminiError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::MissingApiKey => (
                StatusCode::PRECONDITION_FAILED,
                "MISSING_API_KEY",
                "Please configure your API Key in Settings first.".to_string(),
            ),
            AppError::Superseded => (
                StatusCode::CONFLICT,
                "REQUEST_SUPERSEDED",
                "A newer request was issued; this result was discarded.".to_string(),
            ),
            AppError::Gemini(e) => {
                tracing::error!("Gemini error: {e}");
                match e {
                    GeminiError::Http(_) => (
                        StatusCode::BAD_GATEWAY,
                        "NETWORK_ERROR",
                        "Could not reach the AI provider.".to_string(),
                    ),
                    GeminiError::Api { .. } => (
                        StatusCode::BAD_GATEWAY,
                        "UPSTREAM_ERROR",
                        "The AI provider rejected the request. Verify your API Key.".to_string(),
                    ),
                    GeminiError::EmptyResponse
                    | GeminiError::Parse(_)
                    | GeminiError::Schema(_) => (
                        StatusCode::BAD_GATEWAY,
                        "ANALYSIS_ERROR",
                        "Analysis failed. Please try again.".to_string(),
                    ),
                }
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
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
