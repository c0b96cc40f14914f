//! Error types for folio-contact

use std::time::Duration;
use thiserror::Error;

/// Errors raised by configuration and the mail relay
///
/// Field validation failures are not errors: they are reported as
/// [`FieldErrors`](crate::types::FieldErrors) on the submission state.
#[derive(Error, Debug)]
pub enum Error {
    /// Relay answered with a non-success status
    #[error("relay rejected the submission with status {0}")]
    RelayStatus(u16),

    /// Transport-level failure talking to the relay
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Relay did not answer within the configured bound
    #[error("relay did not respond within {0:?}")]
    Timeout(Duration),

    /// No relay access key in the environment
    #[error("no relay access key found. Set {0}")]
    MissingAccessKey(&'static str),

    /// Malformed configuration value
    #[error("configuration error: {0}")]
    Config(String),

    /// Payload encoding failure
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for folio-contact
pub type Result<T> = std::result::Result<T, Error>;
