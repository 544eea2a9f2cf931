//! Error types for the remote logging client.
use thiserror::Error;

/// Errors raised while building a `Dispatcher`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("server name must not be empty")]
    EmptyServerName,

    #[error("failed to build http client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Errors raised by a single delivery attempt.
///
/// These never leave the background task that produced them.
#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("request to {endpoint} failed: {source}")]
    Request {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("sink at {endpoint} answered with status {status}")]
    Status { endpoint: String, status: u16 },

    #[error("malformed acknowledgement from {endpoint}: {source}")]
    Acknowledgement {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("delivery timed out after {0:?}")]
    Timeout(std::time::Duration),
}
