//! Entry point for running the log sink.
use crate::logging::StdoutWriter;
use crate::web::{sink_router, start_server};
use anyhow::Result;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Serves the ingestion endpoint, printing every accepted event to stdout.
pub async fn run(listener: TcpListener) -> Result<()> {
    start_server("Logging server", listener, sink_router(Arc::new(StdoutWriter))).await
}
