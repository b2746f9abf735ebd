//! Top-level error type for service wiring.
//!
//! Notification delivery itself never returns errors; this type covers the
//! paths that can legitimately fail at startup.

use thiserror::Error;

use crate::config::ConfigurationError;
use crate::messaging::MessagingError;

#[derive(Debug, Error)]
pub enum SearchNotifyError {
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),
    #[error("Messaging error: {0}")]
    Messaging(#[from] MessagingError),
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, SearchNotifyError>;
