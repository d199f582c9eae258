//! Prometheus metrics for the greeks advisor.
//!
//! Recording is a no-op until [`init_metrics`] installs the exporter, so
//! tests and metrics-disabled deployments pay nothing.
//!
//! # Example
//!
//! ```ignore
//! use greeks_advisor::observability::{init_metrics, MetricsConfig};
//!
//! init_metrics(&MetricsConfig::default()).expect("Failed to initialize metrics");
//! record_analysis("text", 4, 0.0004);
//! ```

use metrics::{counter, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::{Ipv4Addr, SocketAddr};

/// Configuration for the metrics exporter.
#[derive(Debug, Clone)]
pub struct MetricsConfig {
    /// Address to bind the metrics HTTP listener.
    pub listen_addr: SocketAddr,
    /// Histogram buckets for analysis latency (in seconds).
    pub latency_buckets: Vec<f64>,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, 9090)),
            // Latency buckets from 10us to 5s (OCR dominates the upper range)
            latency_buckets: vec![
                0.000_01, 0.000_1, 0.001, 0.01, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0,
            ],
        }
    }
}

impl MetricsConfig {
    /// Create a new metrics configuration with custom address.
    #[must_use]
    pub fn with_addr(addr: SocketAddr) -> Self {
        Self {
            listen_addr: addr,
            ..Default::default()
        }
    }
}

/// Initialize the Prometheus metrics exporter.
///
/// This starts an HTTP server that exposes metrics at `/metrics`.
///
/// # Errors
///
/// Returns an error if the metrics exporter fails to start (e.g., port already in use).
pub fn init_metrics(config: &MetricsConfig) -> Result<(), MetricsError> {
    PrometheusBuilder::new()
        .with_http_listener(config.listen_addr)
        .set_buckets(&config.latency_buckets)
        .map_err(|e| MetricsError::Configuration(e.to_string()))?
        .install()
        .map_err(|e| MetricsError::Installation(e.to_string()))?;

    tracing::info!(
        addr = %config.listen_addr,
        "Prometheus metrics exporter started"
    );

    Ok(())
}

/// Error type for metrics operations.
#[derive(Debug, thiserror::Error)]
pub enum MetricsError {
    /// Failed to configure metrics exporter.
    #[error("metrics configuration error: {0}")]
    Configuration(String),
    /// Failed to install metrics exporter.
    #[error("metrics installation error: {0}")]
    Installation(String),
}

/// Record a completed analysis cycle.
///
/// # Arguments
///
/// * `channel` - Input channel ("image", "text", "manual")
/// * `metrics_extracted` - Number of Greeks present in the snapshot
/// * `duration_seconds` - Wall time of the cycle
pub fn record_analysis(channel: &'static str, metrics_extracted: usize, duration_seconds: f64) {
    counter!("greeks_analyses_total", "channel" => channel, "outcome" => "completed").increment(1);
    counter!("greeks_metrics_extracted_total", "channel" => channel)
        .increment(metrics_extracted as u64);
    histogram!("greeks_analysis_duration_seconds", "channel" => channel)
        .record(duration_seconds);
}

/// Record a cycle rejected before parsing (empty input).
pub fn record_rejection(channel: &'static str) {
    counter!("greeks_analyses_total", "channel" => channel, "outcome" => "rejected").increment(1);
}

/// Record a recommendation verdict.
pub fn record_recommendation(option_type: &'static str, verdict: &'static str) {
    counter!(
        "greeks_recommendations_total",
        "option_type" => option_type,
        "verdict" => verdict
    )
    .increment(1);
}

/// Record a failed text recognition call.
pub fn record_ocr_failure() {
    counter!("greeks_ocr_failures_total").increment(1);
}

/// Recorder that remembers every counter registration as
/// `name{label=value,...}`, for use with `metrics::with_local_recorder`.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct CapturingRecorder {
    counters: std::sync::Mutex<Vec<String>>,
}

#[cfg(test)]
impl CapturingRecorder {
    /// Counter registrations seen so far.
    pub fn counters(&self) -> Vec<String> {
        self.counters.lock().unwrap().clone()
    }
}

#[cfg(test)]
impl metrics::Recorder for CapturingRecorder {
    fn describe_counter(&self, _: metrics::KeyName, _: Option<metrics::Unit>, _: metrics::SharedString) {}

    fn describe_gauge(&self, _: metrics::KeyName, _: Option<metrics::Unit>, _: metrics::SharedString) {}

    fn describe_histogram(
        &self,
        _: metrics::KeyName,
        _: Option<metrics::Unit>,
        _: metrics::SharedString,
    ) {
    }

    fn register_counter(&self, key: &metrics::Key, _: &metrics::Metadata<'_>) -> metrics::Counter {
        let labels: Vec<String> = key
            .labels()
            .map(|l| format!("{}={}", l.key(), l.value()))
            .collect();
        self.counters
            .lock()
            .unwrap()
            .push(format!("{}{{{}}}", key.name(), labels.join(",")));
        metrics::Counter::noop()
    }

    fn register_gauge(&self, _: &metrics::Key, _: &metrics::Metadata<'_>) -> metrics::Gauge {
        metrics::Gauge::noop()
    }

    fn register_histogram(&self, _: &metrics::Key, _: &metrics::Metadata<'_>) -> metrics::Histogram {
        metrics::Histogram::noop()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = MetricsConfig::default();
        assert_eq!(config.listen_addr.port(), 9090);
        assert!(config.latency_buckets.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn with_addr_keeps_buckets() {
        let addr = SocketAddr::from(([127, 0, 0, 1], 9100));
        let config = MetricsConfig::with_addr(addr);
        assert_eq!(config.listen_addr, addr);
        assert_eq!(config.latency_buckets, MetricsConfig::default().latency_buckets);
    }

    #[test]
    fn recording_without_exporter_is_noop() {
        record_analysis("text", 4, 0.001);
        record_rejection("image");
        record_recommendation("call", "avoid");
        record_ocr_failure();
    }

    #[test]
    fn completed_and_rejected_cycles_share_the_analyses_counter() {
        let recorder = CapturingRecorder::default();
        metrics::with_local_recorder(&recorder, || {
            record_analysis("manual", 6, 0.001);
            record_rejection("text");
        });

        let counters = recorder.counters();
        assert!(counters.contains(
            &"greeks_analyses_total{channel=manual,outcome=completed}".to_string()
        ));
        assert!(counters.contains(
            &"greeks_analyses_total{channel=text,outcome=rejected}".to_string()
        ));
    }
}
