//! HTTP surface: request-shape validation and routing around [`Translator`].

use crate::error::{Result, TranslateError};
use crate::translation::{TranslationPair, Translator};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use serde_json::Value;
use tower_http::trace::TraceLayer;
use tracing::{debug, error};

/// Validated body of `POST /translate`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslateRequest {
    pub words: Vec<String>,
    pub target_language: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateResponse {
    pub words: Vec<TranslationPair>,
    pub target_language: String,
}

impl TranslateRequest {
    /// Check the raw JSON shape before the pipeline sees it.
    pub fn from_value(value: &Value) -> Result<Self> {
        let words = value
            .get("words")
            .and_then(Value::as_array)
            .filter(|words| !words.is_empty())
            .ok_or_else(|| {
                TranslateError::MalformedRequest("Words array must not be empty".to_string())
            })?;

        let words = words
            .iter()
            .map(|w| w.as_str().map(str::to_string))
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| {
                TranslateError::MalformedRequest("Words array must contain only strings".to_string())
            })?;

        let target_language = value
            .get("targetLanguage")
            .and_then(Value::as_str)
            .filter(|lang| !lang.is_empty())
            .ok_or_else(|| {
                TranslateError::MalformedRequest("Target language must be specified".to_string())
            })?
            .to_string();

        Ok(Self {
            words,
            target_language,
        })
    }
}

pub fn router(translator: Translator) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/translate", post(translate))
        .layer(TraceLayer::new_for_http())
        .with_state(translator)
}

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

async fn translate(
    State(translator): State<Translator>,
    payload: std::result::Result<Json<Value>, JsonRejection>,
) -> Result<Json<TranslateResponse>> {
    debug!("Received translation request");

    let Json(body) = payload.map_err(|rejection| {
        TranslateError::MalformedRequest(format!("Invalid JSON body: {}", rejection.body_text()))
    })?;
    let request = TranslateRequest::from_value(&body)?;

    match translator
        .translate(&request.words, &request.target_language)
        .await
    {
        Ok(words) => {
            debug!("Translation completed successfully");
            Ok(Json(TranslateResponse {
                words,
                target_language: request.target_language,
            }))
        }
        Err(e) => {
            error!("Translation error: {}", e);
            Err(e)
        }
    }
}
