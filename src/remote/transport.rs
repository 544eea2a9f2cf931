//! Delivery of a single `LogEvent` to a sink endpoint.
use super::error::DeliveryError;
use crate::types::{Ack, LogEvent};
use async_trait::async_trait;
use std::time::Duration;
use tracing::trace;

/// Delivers one event to one endpoint.
///
/// Implementations must be cheap to share between many concurrent,
/// short-lived deliveries.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends `event` to `endpoint` exactly once.
    ///
    /// # Errors
    ///
    /// Returns an error if the sink cannot be reached or does not acknowledge
    /// the event.
    async fn deliver(&self, endpoint: &str, event: &LogEvent) -> Result<(), DeliveryError>;
}

/// `Transport` that POSTs events as JSON.
#[derive(Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Creates a transport whose requests are bounded by `timeout`.
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout)
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn deliver(&self, endpoint: &str, event: &LogEvent) -> Result<(), DeliveryError> {
        let response = self
            .client
            .post(endpoint)
            .json(event)
            .send()
            .await
            .map_err(|source| DeliveryError::Request {
                endpoint: endpoint.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(DeliveryError::Status {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
            });
        }

        let ack: Ack = response
            .json()
            .await
            .map_err(|source| DeliveryError::Acknowledgement {
                endpoint: endpoint.to_string(),
                source,
            })?;

        trace!(status = %ack.status, timestamp = %ack.timestamp, "sink acknowledged event");
        Ok(())
    }
}
