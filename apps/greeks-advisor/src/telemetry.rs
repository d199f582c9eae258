//! Tracing Setup
//!
//! Installs the global `tracing` subscriber from the logging configuration.
//!
//! `RUST_LOG` takes precedence over the configured level when set.
//!
//! # Usage
//!
//! ```rust,ignore
//! use greeks_advisor::telemetry::init_tracing;
//!
//! init_tracing(&config.observability.logging)?;
//! ```

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Errors raised while installing the subscriber.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// The configured level is not a valid filter directive.
    #[error("Invalid log level '{level}': {message}")]
    InvalidLevel {
        /// Level from configuration.
        level: String,
        /// Parser message.
        message: String,
    },

    /// A global subscriber is already installed.
    #[error("Failed to install tracing subscriber: {0}")]
    Install(String),
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// One JSON object per event.
    Json,
    /// Human readable multi-line output.
    Pretty,
}

impl LogFormat {
    /// Parse a configured format name; anything but "pretty" is JSON.
    #[must_use]
    pub fn from_config(format: &str) -> Self {
        if format.eq_ignore_ascii_case("pretty") {
            Self::Pretty
        } else {
            Self::Json
        }
    }
}

/// Build the level filter, preferring `RUST_LOG` over `level`.
///
/// # Errors
///
/// Returns `TelemetryError::InvalidLevel` if `level` is not a valid directive.
pub fn build_filter(level: &str) -> Result<EnvFilter, TelemetryError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(level).map_err(|e| TelemetryError::InvalidLevel {
        level: level.to_string(),
        message: e.to_string(),
    })
}

/// Install the global tracing subscriber.
///
/// # Errors
///
/// Returns a `TelemetryError` if the level is invalid or a subscriber is
/// already installed.
pub fn init_tracing(logging: &LoggingConfig) -> Result<(), TelemetryError> {
    let filter = build_filter(&logging.level)?;
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let installed = match LogFormat::from_config(&logging.format) {
        LogFormat::Json => builder.json().with_current_span(true).try_init(),
        LogFormat::Pretty => builder.pretty().with_target(false).try_init(),
    };

    installed.map_err(|e| TelemetryError::Install(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_parsing() {
        assert_eq!(LogFormat::from_config("pretty"), LogFormat::Pretty);
        assert_eq!(LogFormat::from_config("PRETTY"), LogFormat::Pretty);
        assert_eq!(LogFormat::from_config("json"), LogFormat::Json);
        assert_eq!(LogFormat::from_config(""), LogFormat::Json);
    }

    #[test]
    fn test_invalid_level_rejected() {
        if std::env::var("RUST_LOG").is_ok() {
            return;
        }
        let Err(err) = build_filter("greeks_advisor=verbose") else {
            panic!("expected invalid directive");
        };
        assert!(err.to_string().contains("Invalid log level"));
    }

    #[test]
    fn test_valid_level_accepted() {
        assert!(build_filter("debug").is_ok());
        assert!(build_filter("greeks_advisor=trace,info").is_ok());
    }
}
