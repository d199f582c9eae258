//! Observability module for metrics.
//!
//! Prometheus counters and histograms for analysis cycles, recommendations
//! and text recognition.

mod metrics;

pub use self::metrics::{
    MetricsConfig, MetricsError, init_metrics, record_analysis, record_ocr_failure,
    record_recommendation, record_rejection,
};

#[cfg(test)]
pub use self::metrics::CapturingRecorder;
