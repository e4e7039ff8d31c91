//! Error taxonomy for the translate pipeline.
//!
//! Word-level discards during cleaning are not errors. Only an empty
//! validated set, a malformed request, or a failed backend call surface here.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TranslateError {
    /// Request shape rejected before the pipeline runs
    #[error("{0}")]
    MalformedRequest(String),

    /// Every submitted word was discarded during cleaning
    #[error("No valid words to translate.")]
    NoValidWords,

    /// At least one backend call failed; the batch yields nothing
    #[error("Translation backend error: {0}")]
    Backend(String),
}

pub type Result<T> = std::result::Result<T, TranslateError>;

impl TranslateError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            TranslateError::MalformedRequest(_) | TranslateError::NoValidWords => {
                StatusCode::BAD_REQUEST
            }
            TranslateError::Backend(_) => StatusCode::BAD_GATEWAY,
        }
    }

    /// Message shown to the client. Backend causes stay in the logs.
    pub fn client_message(&self) -> String {
        match self {
            TranslateError::Backend(_) => {
                "Failed to translate words. Please try again later.".to_string()
            }
            other => other.to_string(),
        }
    }
}

impl IntoResponse for TranslateError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = serde_json::json!({
            "statusCode": status.as_u16(),
            "error": status.canonical_reason().unwrap_or("Error"),
            "message": self.client_message(),
        });

        (status, Json(body)).into_response()
    }
}
