use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::analysis::extractor::ExtractError;
use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Document error: {0}")]
    Document(#[from] ExtractError),

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),
}

impl AppError {
    /// Message safe to show in the HTML page.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(msg) => msg.clone(),
            AppError::Document(_) => {
                "The uploaded resume could not be read as a PDF. Please upload a different file."
                    .to_string()
            }
            AppError::Llm(_) => {
                "The AI service could not be reached or rejected the request. Please try again."
                    .to_string()
            }
        }
    }

    pub fn log(&self) {
        match self {
            AppError::Validation(_) => {}
            AppError::Document(e) => tracing::error!("Document error: {e}"),
            AppError::Llm(e) => tracing::error!("LLM error: {e}"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.log();
        let (status, code) = match &self {
            AppError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            AppError::Document(_) => (StatusCode::UNPROCESSABLE_ENTITY, "DOCUMENT_ERROR"),
            AppError::Llm(_) => (StatusCode::BAD_GATEWAY, "LLM_ERROR"),
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
