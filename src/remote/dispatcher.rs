//! Fire-and-forget dispatch of log events to a remote sink.
//!
//! A `Dispatcher` never makes its caller wait for the network and never
//! hands a delivery failure back to it. Each call spawns one bounded task on
//! the current tokio runtime; if there is no runtime, the event is dropped.
use super::error::{ConfigError, DeliveryError};
use super::transport::{HttpTransport, Transport};
use crate::types::{LogEvent, Severity};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tracing::{debug, trace};

/// Static settings of a `Dispatcher`, fixed at construction.
#[derive(Debug, Clone)]
pub struct DispatcherConfig {
    /// URL of the sink's ingestion route. Empty disables dispatch.
    pub endpoint: String,
    /// Identity attached to every event from this dispatcher.
    pub server_name: String,
    /// Upper bound on the lifetime of one delivery attempt.
    pub timeout: Duration,
}

impl DispatcherConfig {
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(2);

    pub fn new(endpoint: impl Into<String>, server_name: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            server_name: server_name.into(),
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// What `Dispatcher::dispatch` did with an event.
///
/// This says nothing about whether the event reached the sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// No endpoint is configured.
    Disabled,
    /// There was no runtime to run the delivery on.
    NoRuntime,
    /// The event could not be built (empty message).
    Rejected,
    /// A delivery task was spawned.
    Scheduled,
}

pub struct Dispatcher {
    endpoint: Option<Arc<str>>,
    server_name: Arc<str>,
    timeout: Duration,
    transport: Arc<dyn Transport>,
}

impl Dispatcher {
    /// Creates a dispatcher that delivers over HTTP.
    ///
    /// # Errors
    ///
    /// Returns an error if `server_name` is empty or the HTTP client cannot
    /// be built.
    pub fn new(config: DispatcherConfig) -> Result<Self, ConfigError> {
        let transport = HttpTransport::new(config.timeout)?;
        Self::with_transport(config, Arc::new(transport))
    }

    /// Creates a dispatcher on top of an arbitrary `Transport`.
    ///
    /// # Errors
    ///
    /// Returns an error if `server_name` is empty.
    pub fn with_transport(
        config: DispatcherConfig,
        transport: Arc<dyn Transport>,
    ) -> Result<Self, ConfigError> {
        if config.server_name.trim().is_empty() {
            return Err(ConfigError::EmptyServerName);
        }

        let endpoint = config.endpoint.trim();
        let endpoint = (!endpoint.is_empty()).then(|| Arc::from(endpoint));

        Ok(Self {
            endpoint,
            server_name: Arc::from(config.server_name.as_str()),
            timeout: config.timeout,
            transport,
        })
    }

    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }

    /// Hands an event to the background and returns immediately.
    pub fn dispatch(&self, message: impl Into<String>, level: Severity, args: Vec<Value>) -> Dispatch {
        let Some(endpoint) = self.endpoint.clone() else {
            return Dispatch::Disabled;
        };

        let Ok(handle) = Handle::try_current() else {
            trace!("no tokio runtime available, dropping log event");
            return Dispatch::NoRuntime;
        };

        let event = match LogEvent::new(message, self.server_name.as_ref(), level, args) {
            Ok(event) => event,
            Err(e) => {
                debug!("dropping log event: {}", e);
                return Dispatch::Rejected;
            }
        };

        let transport = self.transport.clone();
        let timeout = self.timeout;

        handle.spawn(async move {
            let outcome = match tokio::time::timeout(timeout, transport.deliver(&endpoint, &event)).await {
                Ok(result) => result,
                Err(_) => Err(DeliveryError::Timeout(timeout)),
            };

            match outcome {
                Ok(()) => trace!(endpoint = %endpoint, "log event delivered"),
                Err(e) => debug!(endpoint = %endpoint, "log event discarded: {}", e),
            }
        });

        Dispatch::Scheduled
    }
}
