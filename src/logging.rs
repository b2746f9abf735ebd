//! # Structured Logging Module
//!
//! Environment-aware structured logging. Console output everywhere, JSON
//! formatting in production so log lines stay machine-parseable where a
//! collector is watching.

use std::sync::OnceLock;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

static LOGGER_INITIALIZED: OnceLock<()> = OnceLock::new();

/// Initialize structured logging with environment-specific configuration.
///
/// Safe to call more than once; later calls are no-ops, and an already
/// installed global subscriber (e.g. from a test harness) is left alone.
pub fn init_structured_logging() {
    LOGGER_INITIALIZED.get_or_init(|| {
        let environment = get_environment();
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_log_level(&environment)));

        let init_result = if environment == "production" {
            tracing_subscriber::registry()
                .with(fmt::layer().json().with_target(true).with_filter(filter))
                .try_init()
        } else {
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_filter(filter))
                .try_init()
        };

        if init_result.is_err() {
            tracing::debug!("global tracing subscriber already initialized; continuing with it");
        }
    });
}

/// Current environment from environment variables.
fn get_environment() -> String {
    std::env::var("SEARCH_NOTIFY_ENV")
        .or_else(|_| std::env::var("APP_ENV"))
        .unwrap_or_else(|_| "development".to_string())
}

/// Default log level based on environment, overridable via `RUST_LOG`.
fn default_log_level(environment: &str) -> &'static str {
    match environment {
        "production" => "info",
        _ => "debug",
    }
}
