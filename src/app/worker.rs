//! Entry point for running the worker.
use crate::calculator::Calculator;
use crate::cli::run_prompt;
use crate::remote::{Dispatcher, DispatcherConfig};
use crate::web::{start_server, worker_router};
use anyhow::Result;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info};

/// Runs the worker's HTTP endpoint and, if asked, the terminal prompt.
///
/// With the prompt enabled the process ends when the prompt does.
///
/// # Errors
///
/// Returns an error if the dispatcher cannot be built or the server fails.
pub async fn run(listener: TcpListener, config: DispatcherConfig, interactive: bool) -> Result<()> {
    let dispatcher = Arc::new(Dispatcher::new(config)?);
    match dispatcher.endpoint() {
        Some(endpoint) => info!("Reporting computations to {}", endpoint),
        None => info!("No sink endpoint configured, events will not be reported"),
    }

    let calculator = Calculator::new(dispatcher);
    let app = worker_router(Arc::new(calculator.clone()));

    if !interactive {
        return start_server("Power of 2 calculator", listener, app).await;
    }

    let server = tokio::spawn(async move {
        if let Err(e) = start_server("Power of 2 calculator", listener, app).await {
            error!("HTTP server error: {}", e);
        }
    });

    let result = run_prompt(calculator).await;
    server.abort();
    result
}
