//! Structured errors for the Greeks advisor HTTP surface.
//!
//! Application errors are mapped to an [`AdvisorError`] carrying a stable
//! code, a message and optional key-value context.
//!
//! # HTTP Status Codes
//!
//! | Code | Status | Usage |
//! |------|--------|-------|
//! | `INVALID_REQUEST` | 400 | Malformed body or unknown field value |
//! | `PAYLOAD_TOO_LARGE` | 413 | Image upload above the configured limit |
//! | `NOTHING_TO_ANALYZE` | 422 | Empty image or blank text |

use std::collections::HashMap;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::application::use_cases::AnalysisError;

/// Error codes returned to clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Invalid request format or field value.
    InvalidRequest,
    /// Upload exceeds the size limit.
    PayloadTooLarge,
    /// Input carried nothing to parse.
    NothingToAnalyze,
}

impl ErrorCode {
    /// HTTP status for this code.
    #[must_use]
    pub const fn http_status(&self) -> StatusCode {
        match self {
            Self::InvalidRequest => StatusCode::BAD_REQUEST,
            Self::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            Self::NothingToAnalyze => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    /// Stable reason string.
    #[must_use]
    pub const fn reason(&self) -> &'static str {
        match self {
            Self::InvalidRequest => "INVALID_REQUEST",
            Self::PayloadTooLarge => "PAYLOAD_TOO_LARGE",
            Self::NothingToAnalyze => "NOTHING_TO_ANALYZE",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.reason())
    }
}

/// An error with a code and context, rendered as a JSON body.
#[derive(Debug, Error)]
#[error("[{}] {message}", .code.reason())]
pub struct AdvisorError {
    code: ErrorCode,
    message: String,
    context: Vec<(String, String)>,
}

impl AdvisorError {
    /// Create a new error.
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            context: Vec::new(),
        }
    }

    /// Add context to the error.
    #[must_use]
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.push((key.into(), value.into()));
        self
    }

    /// Get the error code.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        self.code
    }

    /// Get the message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the context.
    #[must_use]
    pub fn context(&self) -> &[(String, String)] {
        &self.context
    }

    /// Invalid request.
    #[must_use]
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    /// Body larger than `limit` bytes.
    #[must_use]
    pub fn payload_too_large(limit: usize) -> Self {
        Self::new(
            ErrorCode::PayloadTooLarge,
            format!("Request body exceeds the {limit} byte limit"),
        )
        .with_context("limit", limit.to_string())
    }

    /// Body sent to the client.
    #[must_use]
    pub fn to_http_response(&self) -> HttpErrorResponse {
        HttpErrorResponse {
            code: self.code.reason().to_string(),
            message: self.message.clone(),
            status: self.code.http_status().as_u16(),
            details: self.context.iter().cloned().collect(),
        }
    }
}

impl From<AnalysisError> for AdvisorError {
    fn from(error: AnalysisError) -> Self {
        match &error {
            AnalysisError::NothingToAnalyze { channel } => {
                Self::new(ErrorCode::NothingToAnalyze, error.to_string())
                    .with_context("channel", channel.as_str())
            }
        }
    }
}

impl IntoResponse for AdvisorError {
    fn into_response(self) -> Response {
        (self.code.http_status(), Json(self.to_http_response())).into_response()
    }
}

/// JSON error body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpErrorResponse {
    /// Error code string.
    pub code: String,
    /// Human-readable message.
    pub message: String,
    /// HTTP status code.
    pub status: u16,
    /// Additional details.
    pub details: HashMap<String, String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dto::InputChannel;

    #[test]
    fn test_error_code_status_mapping() {
        assert_eq!(ErrorCode::InvalidRequest.http_status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ErrorCode::NothingToAnalyze.http_status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ErrorCode::PayloadTooLarge.http_status(),
            StatusCode::PAYLOAD_TOO_LARGE
        );
    }

    #[test]
    fn test_error_creation() {
        let error = AdvisorError::new(ErrorCode::InvalidRequest, "Bad request")
            .with_context("field", "option_type")
            .with_context("value", "straddle");

        assert_eq!(error.code(), ErrorCode::InvalidRequest);
        assert_eq!(error.message(), "Bad request");
        assert_eq!(error.context().len(), 2);
    }

    #[test]
    fn test_from_analysis_error() {
        let error = AdvisorError::from(AnalysisError::NothingToAnalyze {
            channel: InputChannel::Text,
        });

        assert_eq!(error.code(), ErrorCode::NothingToAnalyze);
        assert_eq!(error.message(), "Nothing to analyze: text input is empty");
        assert_eq!(
            error.context(),
            &[("channel".to_string(), "text".to_string())]
        );
    }

    #[test]
    fn test_to_http_response() {
        let response = AdvisorError::payload_too_large(1024).to_http_response();

        assert_eq!(response.code, "PAYLOAD_TOO_LARGE");
        assert_eq!(response.status, 413);
        assert_eq!(response.details.get("limit").map(String::as_str), Some("1024"));
    }

    #[test]
    fn test_error_display() {
        let error = AdvisorError::invalid_request("Missing field");
        assert_eq!(error.to_string(), "[INVALID_REQUEST] Missing field");
    }

    #[test]
    fn test_into_response_status() {
        let response = AdvisorError::payload_too_large(8).into_response();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }
}
