//! REST API for sentiment analysis.
//!
//! - `GET /api/health` reports liveness.
//! - `POST /api/analyze` scores `{"text": "..."}` and returns the full
//!   analysis breakdown.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use sentiforge_core::{AnalysisResult, PatternEstimator, PolarityEstimator, Scorer};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, info, warn};

/// Shared, read-only application state.
pub struct AppState<E = PatternEstimator> {
    scorer: Scorer<E>,
}

impl<E: PolarityEstimator> AppState<E> {
    pub fn new(scorer: Scorer<E>) -> Self {
        Self { scorer }
    }

    pub fn scorer(&self) -> &Scorer<E> {
        &self.scorer
    }
}

/// Request body for `POST /api/analyze`.
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

/// Body of every non-2xx response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Errors surfaced to API clients.
#[derive(Debug, Error)]
pub enum ApiError {
    /// `text` missing, null, or blank.
    #[error("No text provided")]
    NoText,

    /// Body is not a JSON object with a string `text`.
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// Analysis did not complete.
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NoText | ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let reason = self.to_string();
        if status.is_server_error() {
            error!(event = "request_failed", reason = %reason);
        } else {
            warn!(event = "request_rejected", reason = %reason);
        }
        (status, Json(ErrorResponse { error: reason })).into_response()
    }
}

/// Creates the API router.
pub fn router<E>(state: Arc<AppState<E>>) -> Router
where
    E: PolarityEstimator + 'static,
{
    Router::new()
        .route("/api/health", get(health))
        .route("/api/analyze", post(analyze::<E>))
        .with_state(state)
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        message: "Dashboard is running!".to_string(),
    })
}

async fn analyze<E>(
    State(state): State<Arc<AppState<E>>>,
    body: Bytes,
) -> Result<Json<AnalysisResult>, ApiError>
where
    E: PolarityEstimator + 'static,
{
    let text = request_text(&body)?;

    let result = tokio::task::spawn_blocking(move || state.scorer.analyze(&text))
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    let found = result
        .found_words
        .iter()
        .map(|w| w.word.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    info!(
        event = "analysis",
        text = %result.text,
        sentiment = %result.sentiment,
        polarity = result.polarity,
        external = result.analysis_details.external_score,
        lexicon_avg = result.analysis_details.lexicon_avg,
        found_count = result.found_words.len() as u64,
        found = %found,
    );

    Ok(Json(result))
}

/// Extracts the trimmed `text` field from a request body.
pub fn request_text(body: &[u8]) -> Result<String, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(ApiError::NoText);
    }
    let request: AnalyzeRequest =
        serde_json::from_slice(body).map_err(|e| ApiError::InvalidBody(e.to_string()))?;

    match request.text.as_deref().map(str::trim) {
        Some(text) if !text.is_empty() => Ok(text.to_string()),
        _ => Err(ApiError::NoText),
    }
}
