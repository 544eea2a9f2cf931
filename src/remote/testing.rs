//! Test doubles for the `Transport` seam.
use super::error::DeliveryError;
use super::transport::Transport;
use crate::types::LogEvent;
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::Notify;

/// Records every delivery and can be made slow or failing.
#[derive(Default)]
pub struct MockTransport {
    pub calls: AtomicUsize,
    pub finished: AtomicUsize,
    pub cancelled: Arc<AtomicUsize>,
    pub delivered: Mutex<Vec<(String, LogEvent)>>,
    pub delay: Option<Duration>,
    pub fail: bool,
    pub done: Notify,
}

impl MockTransport {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn events(&self) -> Vec<LogEvent> {
        self.delivered
            .lock()
            .unwrap()
            .iter()
            .map(|(_, event)| event.clone())
            .collect()
    }
}

// Counts the delivery as cancelled if it is dropped before completing.
struct CancelGuard {
    cancelled: Arc<AtomicUsize>,
    completed: bool,
}

impl Drop for CancelGuard {
    fn drop(&mut self) {
        if !self.completed {
            self.cancelled.fetch_add(1, Ordering::SeqCst);
        }
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn deliver(&self, endpoint: &str, event: &LogEvent) -> Result<(), DeliveryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut guard = CancelGuard {
            cancelled: self.cancelled.clone(),
            completed: false,
        };

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        guard.completed = true;
        self.delivered
            .lock()
            .unwrap()
            .push((endpoint.to_string(), event.clone()));
        self.finished.fetch_add(1, Ordering::SeqCst);
        self.done.notify_one();

        if self.fail {
            Err(DeliveryError::Status {
                endpoint: endpoint.to_string(),
                status: 500,
            })
        } else {
            Ok(())
        }
    }
}
