// Allow unwrap/expect in tests - tests should panic on unexpected errors
// Allow test-specific patterns and pedantic lints in test code
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::float_cmp,
        clippy::too_many_lines,
        clippy::needless_pass_by_value,
        clippy::items_after_statements
    )
)]

//! Greeks Advisor - Option Greeks extraction and recommendation
//!
//! Pulls option Greeks out of OCR text, pasted text or manual entry, decides
//! whether a call or put looks worth buying, and bands each metric for
//! display.
//!
//! # Architecture (Clean Architecture + Hexagonal)
//!
//! ## Layers (inside → outside)
//!
//! - **Domain**: Pure parsing and evaluation
//!   - `greek_analysis::parsing`: Loose Scan and Anchored Match strategies
//!   - `greek_analysis::services`: Recommendation engine, band classifier
//!   - `greek_analysis::value_objects`: Snapshot, thresholds, verdicts
//!
//! - **Application**: One parse-then-classify cycle
//!   - `ports`: `TextRecognitionPort`
//!   - `use_cases`: `AnalyzeGreeks`
//!   - `dto`: Requests and reports
//!
//! - **Infrastructure**: Adapters
//!   - `ocr`: Tesseract command line recognizer
//!   - `http`: Axum REST API

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Clean Architecture Layers
// =============================================================================

/// Domain layer - Parsing and evaluation with no external dependencies.
pub mod domain;

/// Application layer - Use cases and port definitions.
pub mod application;

/// Infrastructure layer - Adapters and external integrations.
pub mod infrastructure;

// =============================================================================
// Cross-cutting
// =============================================================================

/// YAML configuration loading and validation.
pub mod config;

/// Client-facing error codes and bodies.
pub mod error;

/// Prometheus metrics.
pub mod observability;

/// Tracing subscriber setup.
pub mod telemetry;

// =============================================================================
// Re-exports
// =============================================================================

pub use domain::greek_analysis::{
    AnchoredMatchParser, Band, BandClassifier, GreekParser, GreekSnapshot, GreekThresholds,
    LooseScanParser, ManualGreeks, MetricName, OptionType, ParsedGreeks, Recommendation,
    RecommendationEngine, RecommendationRules, Verdict,
};

pub use application::dto::{AnalysisReportDto, AnalysisRequestDto, EvaluationDto, InputChannel};
pub use application::ports::{
    DisabledTextRecognizer, RecognitionError, StaticTextRecognizer, TextRecognitionPort,
};
pub use application::use_cases::{AnalysisError, AnalyzeGreeksUseCase};

pub use config::{Config, ConfigError, load_config, load_config_from_env};
pub use error::{AdvisorError, ErrorCode, HttpErrorResponse};
pub use infrastructure::http::{AppState, create_router};
pub use infrastructure::ocr::TesseractRecognizer;
