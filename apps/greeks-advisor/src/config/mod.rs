//! Configuration for the Greeks advisor service.
//!
//! Settings are read from YAML, with `${VAR}` and `${VAR:-default}`
//! placeholders expanded from the environment before parsing.
//!
//! # Usage
//!
//! ```rust,ignore
//! use greeks_advisor::config::load_config;
//!
//! let config = load_config(Some("config.yaml"))?;
//! println!("http port: {}", config.server.http_port);
//! ```

mod observability;
mod ocr;
mod rules;
mod server;

use std::borrow::Cow;
use std::path::Path;
use std::sync::OnceLock;

use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use observability::{LoggingConfig, MetricsSettings, ObservabilityConfig};
pub use ocr::OcrConfig;
pub use rules::{RecommendationConfig, recommendation_rules};
pub use server::ServerConfig;

use crate::domain::greek_analysis::{GreekThresholds, RecommendationRules};

/// Default configuration file path.
pub const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Environment variable overriding the configuration path.
pub const CONFIG_PATH_ENV: &str = "GREEKS_ADVISOR_CONFIG";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        /// Path to the config file.
        path: String,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// Failed to parse YAML configuration.
    #[error("Failed to parse config YAML: {0}")]
    ParseError(#[from] serde_yaml_bw::Error),

    /// Configuration validation failed.
    #[error("Config validation failed: {0}")]
    ValidationError(String),
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// HTTP server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Text recognition configuration.
    #[serde(default)]
    pub ocr: OcrConfig,
    /// Recommendation rule options.
    #[serde(default)]
    pub recommendation: RecommendationConfig,
    /// Favorable bounds and marginal window edges.
    #[serde(default)]
    pub thresholds: GreekThresholds,
    /// Logging and metrics configuration.
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

impl Config {
    /// Engine rules described by this configuration.
    #[must_use]
    pub fn rules(&self) -> RecommendationRules {
        recommendation_rules(&self.recommendation, &self.thresholds)
    }
}

/// Load configuration from a YAML file.
///
/// `path` defaults to [`DEFAULT_CONFIG_PATH`].
///
/// # Errors
///
/// Returns a `ConfigError` if the file cannot be read, parsed, or validated.
pub fn load_config(path: Option<&str>) -> Result<Config, ConfigError> {
    let path = path.unwrap_or(DEFAULT_CONFIG_PATH);
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
        path: path.to_string(),
        source,
    })?;
    load_config_from_string(&contents)
}

/// Resolve the configuration path from the environment and load it.
///
/// A missing default file yields the built-in defaults; a missing file
/// named explicitly through [`CONFIG_PATH_ENV`] is an error.
///
/// # Errors
///
/// Returns a `ConfigError` if the file cannot be read, parsed, or validated.
pub fn load_config_from_env() -> Result<Config, ConfigError> {
    match std::env::var(CONFIG_PATH_ENV) {
        Ok(path) if !path.is_empty() => load_config(Some(&path)),
        _ if Path::new(DEFAULT_CONFIG_PATH).exists() => load_config(None),
        _ => {
            let config = Config::default();
            validate_config(&config)?;
            Ok(config)
        }
    }
}

/// Load configuration from a YAML string.
///
/// # Errors
///
/// Returns a `ConfigError` if the YAML cannot be parsed or validated.
pub fn load_config_from_string(yaml: &str) -> Result<Config, ConfigError> {
    let interpolated = interpolate_env_vars(yaml);
    let config: Config = serde_yaml_bw::from_str(&interpolated)?;
    validate_config(&config)?;
    Ok(config)
}

/// Expand `${VAR}` and `${VAR:-default}` placeholders.
///
/// Unset or empty variables take the default, or the empty string when
/// no default is given.
#[allow(clippy::expect_used)] // Pattern is a literal
fn interpolate_env_vars(input: &str) -> Cow<'_, str> {
    static ENV_VAR_REGEX: OnceLock<Regex> = OnceLock::new();

    let re = ENV_VAR_REGEX.get_or_init(|| {
        Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)(?::-([^}]*))?\}")
            .expect("env var regex is valid")
    });

    re.replace_all(input, |caps: &Captures<'_>| {
        let fallback = caps.get(2).map_or("", |m| m.as_str());
        match std::env::var(&caps[1]) {
            Ok(value) if !value.is_empty() => value,
            _ => fallback.to_string(),
        }
    })
}

fn validate_config(config: &Config) -> Result<(), ConfigError> {
    let t = &config.thresholds;

    for (name, bound) in [("delta", t.delta), ("vega", t.vega), ("rho", t.rho)] {
        if bound.is_nan() || bound <= 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "thresholds.{name} must be positive"
            )));
        }
    }

    if t.theta.is_nan() || t.theta > 0.0 {
        return Err(ConfigError::ValidationError(
            "thresholds.theta must not be positive".to_string(),
        ));
    }

    for (name, floor, bound) in [
        ("delta_marginal_floor", t.delta_marginal_floor, t.delta),
        ("theta_marginal_floor", t.theta_marginal_floor, t.theta),
        ("vega_marginal_floor", t.vega_marginal_floor, t.vega),
        ("rho_marginal_floor", t.rho_marginal_floor, t.rho),
    ] {
        if floor.is_nan() || floor > bound {
            return Err(ConfigError::ValidationError(format!(
                "thresholds.{name} must not exceed its favorable bound"
            )));
        }
    }

    if t.impvol_favorable_below.is_nan() || t.impvol_favorable_below > t.impvol_marginal_up_to {
        return Err(ConfigError::ValidationError(
            "thresholds.impvol_favorable_below must not exceed impvol_marginal_up_to".to_string(),
        ));
    }

    if config.server.max_image_bytes == 0 {
        return Err(ConfigError::ValidationError(
            "server.max_image_bytes must be positive".to_string(),
        ));
    }

    if config.ocr.enabled && config.ocr.command.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "ocr.command must be set when ocr is enabled".to_string(),
        ));
    }

    let metrics = &config.observability.metrics;
    if metrics.enabled && metrics.port == config.server.http_port {
        return Err(ConfigError::ValidationError(
            "observability.metrics.port and server.http_port must be different".to_string(),
        ));
    }

    if !matches!(config.observability.logging.format.as_str(), "json" | "pretty") {
        return Err(ConfigError::ValidationError(
            "observability.logging.format must be one of: [\"json\", \"pretty\"]".to_string(),
        ));
    }

    Ok(())
}

pub(crate) const fn default_true() -> bool {
    true
}
