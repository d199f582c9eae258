//! Greeks Advisor Binary
//!
//! Serves the option Greeks analysis API.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin greeks-advisor
//! ```
//!
//! # Environment Variables
//!
//! - `GREEKS_ADVISOR_CONFIG`: Config file path (default: config.yaml, built-in
//!   defaults when absent)
//! - `RUST_LOG`: Log filter, overrides `observability.logging.level`

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use greeks_advisor::application::ports::{DisabledTextRecognizer, TextRecognitionPort};
use greeks_advisor::application::use_cases::AnalyzeGreeksUseCase;
use greeks_advisor::config::{Config, load_config_from_env};
use greeks_advisor::infrastructure::http::{AppState, create_router};
use greeks_advisor::infrastructure::ocr::TesseractRecognizer;
use greeks_advisor::observability::init_metrics;
use greeks_advisor::telemetry::init_tracing;
use tokio::net::TcpListener;
use tokio::signal;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_dotenv();

    let config = load_config_from_env().context("failed to load configuration")?;
    init_tracing(&config.observability.logging).context("failed to initialize tracing")?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting Greeks Advisor");

    if config.observability.metrics.enabled {
        let metrics = config.observability.metrics.exporter_config();
        init_metrics(&metrics).context("failed to start metrics exporter")?;
        tracing::info!(addr = %metrics.listen_addr, "Prometheus exporter listening");
    }

    if config.ocr.enabled {
        let recognizer = TesseractRecognizer::from_config(&config.ocr);
        tracing::info!(command = recognizer.command(), "Text recognition enabled");
        serve(&config, recognizer).await?;
    } else {
        tracing::warn!("Text recognition disabled, image uploads yield empty snapshots");
        serve(&config, DisabledTextRecognizer).await?;
    }

    tracing::info!("Greeks Advisor stopped");
    Ok(())
}

/// Load .env from the working directory if present.
fn load_dotenv() {
    if let Err(e) = dotenvy::dotenv()
        && !e.not_found()
    {
        eprintln!("Ignoring unreadable .env file: {e}");
    }
}

/// Run the HTTP server until a shutdown signal arrives.
async fn serve<R>(config: &Config, recognizer: R) -> anyhow::Result<()>
where
    R: TextRecognitionPort + 'static,
{
    let rules = config.rules();
    tracing::info!(
        require_rho = rules.require_rho,
        delta = rules.thresholds.delta,
        theta = rules.thresholds.theta,
        vega = rules.thresholds.vega,
        rho = rules.thresholds.rho,
        "Recommendation rules loaded"
    );

    let state = AppState {
        analyze: Arc::new(AnalyzeGreeksUseCase::new(Arc::new(recognizer), rules)),
        max_body_bytes: config.server.max_image_bytes,
        version: env!("CARGO_PKG_VERSION").to_string(),
    };
    let app = create_router(state);

    let http_addr: SocketAddr = format!("{}:{}", config.server.bind_address, config.server.http_port)
        .parse()
        .with_context(|| format!("invalid bind address '{}'", config.server.bind_address))?;

    tracing::info!(%http_addr, "HTTP server starting");
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health");
    tracing::info!("  POST /api/v1/analyze/image");
    tracing::info!("  POST /api/v1/analyze/text");
    tracing::info!("  POST /api/v1/analyze/manual");

    let listener = TcpListener::bind(http_addr)
        .await
        .with_context(|| format!("failed to bind {http_addr}"))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")
}

/// Wait for shutdown signal (SIGTERM or SIGINT).
///
/// # Panics
///
/// Panics if signal handlers cannot be installed.
#[allow(clippy::expect_used)]
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("signal handler installation is critical for graceful shutdown");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("SIGTERM handler installation is critical for graceful shutdown")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, initiating shutdown");
        }
    }
}
