//! HTTP surface of both services.
mod error;
pub mod sink_api;
pub mod worker_api;

use crate::calculator::Calculator;
use crate::logging::LineWriter;
use anyhow::Result;
use axum::{
    routing::{get, post},
    Router,
};
use sink_api::SinkState;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

/// Routes of the log sink.
pub fn sink_router(output: Arc<dyn LineWriter>) -> Router {
    let state = Arc::new(SinkState { output });

    Router::new()
        .route("/", get(sink_api::root))
        .route("/log", post(sink_api::receive_log))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Routes of the worker.
pub fn worker_router(calculator: Arc<Calculator>) -> Router {
    Router::new()
        .route("/", get(worker_api::root))
        .route("/power/:number", get(worker_api::power_of_2))
        .with_state(calculator)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Serves `app` on an already bound listener until the server stops.
pub async fn start_server(name: &str, listener: TcpListener, app: Router) -> Result<()> {
    info!("{} listening on http://{}", name, listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
