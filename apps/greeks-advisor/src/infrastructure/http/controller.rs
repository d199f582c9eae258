//! HTTP Controller (Driver Adapter)
//!
//! Axum-based REST API that delegates to the analysis use case.

use std::sync::Arc;

use axum::{
    Json, Router,
    body::Bytes,
    extract::{
        DefaultBodyLimit, State,
        rejection::{BytesRejection, JsonRejection},
    },
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};

use crate::application::dto::{AnalysisReportDto, AnalysisRequestDto};
use crate::application::ports::TextRecognitionPort;
use crate::application::use_cases::AnalyzeGreeksUseCase;
use crate::error::AdvisorError;

use super::request::{AnalyzeTextRequest, ManualEntryRequest};
use super::response::HealthResponse;

/// Application state shared across handlers.
pub struct AppState<R>
where
    R: TextRecognitionPort,
{
    /// Use case for analyzing snapshots.
    pub analyze: Arc<AnalyzeGreeksUseCase<R>>,
    /// Largest accepted request body in bytes.
    pub max_body_bytes: usize,
    /// Application version.
    pub version: String,
}

impl<R> Clone for AppState<R>
where
    R: TextRecognitionPort,
{
    fn clone(&self) -> Self {
        Self {
            analyze: Arc::clone(&self.analyze),
            max_body_bytes: self.max_body_bytes,
            version: self.version.clone(),
        }
    }
}

/// Create the HTTP router with all endpoints.
pub fn create_router<R>(state: AppState<R>) -> Router
where
    R: TextRecognitionPort + 'static,
{
    let body_limit = state.max_body_bytes;
    Router::new()
        .route("/health", get(health_check))
        .route("/api/v1/analyze/image", post(analyze_image))
        .route("/api/v1/analyze/text", post(analyze_text))
        .route("/api/v1/analyze/manual", post(analyze_manual))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

/// Health check endpoint.
async fn health_check<R>(State(state): State<AppState<R>>) -> impl IntoResponse
where
    R: TextRecognitionPort,
{
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: state.version.clone(),
    })
}

/// Screenshot upload; the body is the encoded image.
async fn analyze_image<R>(
    State(state): State<AppState<R>>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<AnalysisReportDto>, AdvisorError>
where
    R: TextRecognitionPort,
{
    let bytes = body.map_err(|r| rejection_error(r.status(), r.body_text(), state.max_body_bytes))?;
    run(&state, AnalysisRequestDto::Image {
        bytes: bytes.to_vec(),
    })
    .await
}

/// Pasted text.
async fn analyze_text<R>(
    State(state): State<AppState<R>>,
    payload: Result<Json<AnalyzeTextRequest>, JsonRejection>,
) -> Result<Json<AnalysisReportDto>, AdvisorError>
where
    R: TextRecognitionPort,
{
    let Json(request) =
        payload.map_err(|r| rejection_error(r.status(), r.body_text(), state.max_body_bytes))?;
    run(&state, AnalysisRequestDto::Text { text: request.text }).await
}

/// Manually entered values.
async fn analyze_manual<R>(
    State(state): State<AppState<R>>,
    payload: Result<Json<ManualEntryRequest>, JsonRejection>,
) -> Result<Json<AnalysisReportDto>, AdvisorError>
where
    R: TextRecognitionPort,
{
    let Json(request) =
        payload.map_err(|r| rejection_error(r.status(), r.body_text(), state.max_body_bytes))?;
    let option_type = request.option_type().map_err(|e| {
        AdvisorError::invalid_request(e.to_string()).with_context("field", "option_type")
    })?;
    run(&state, AnalysisRequestDto::Manual {
        greeks: request.greeks,
        option_type,
    })
    .await
}

async fn run<R>(
    state: &AppState<R>,
    request: AnalysisRequestDto,
) -> Result<Json<AnalysisReportDto>, AdvisorError>
where
    R: TextRecognitionPort,
{
    let report = state.analyze.execute(request).await.map_err(|e| {
        tracing::info!(error = %e, "Analysis rejected");
        AdvisorError::from(e)
    })?;
    Ok(Json(report))
}

fn rejection_error(status: StatusCode, text: String, limit: usize) -> AdvisorError {
    if status == StatusCode::PAYLOAD_TOO_LARGE {
        AdvisorError::payload_too_large(limit)
    } else {
        AdvisorError::invalid_request(text)
    }
}
