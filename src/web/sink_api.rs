//! HTTP endpoints of the log sink.
use super::error::ApiError;
use crate::logging::{render_line, LineWriter};
use crate::types::{Ack, LogEvent};
use axum::{extract::rejection::JsonRejection, extract::State, Json};
use chrono::Local;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{debug, error};

/// Receipt timestamp format, local time with millisecond precision.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

pub struct SinkState {
    pub output: Arc<dyn LineWriter>,
}

/// Accepts one `LogEvent`, prints it and acknowledges it.
///
/// The timestamp in the acknowledgement is taken from the sink's clock when
/// the event is processed.
pub async fn receive_log(
    State(state): State<Arc<SinkState>>,
    payload: Result<Json<LogEvent>, JsonRejection>,
) -> Result<Json<Ack>, ApiError> {
    let Json(event) = payload.map_err(|rejection| {
        debug!("rejected log payload: {}", rejection.body_text());
        ApiError::from(rejection)
    })?;

    let timestamp = Local::now().format(TIMESTAMP_FORMAT).to_string();
    let line = render_line(&timestamp, &event);

    if let Err(e) = state.output.write_line(&line) {
        error!("Failed to write log line from {}: {}", event.server_name(), e);
        return Err(ApiError::Output(e));
    }

    Ok(Json(Ack {
        status: "logged".to_string(),
        timestamp,
    }))
}

pub async fn root() -> Json<Value> {
    Json(json!({
        "message": "Logging Server",
        "usage": "POST /log - Receive log messages"
    }))
}
